use crate::finder::PatternReport;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const RULE_WIDTH: usize = 35;

pub struct Output<W: WriteColor> {
    out: W,
}

impl Output<StandardStream> {
    pub fn stdout(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> Output<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn set_color(&mut self, color: Color) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))
    }

    fn set_bold(&mut self) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_bold(true))
    }

    fn set_dim(&mut self) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_dimmed(true))
    }

    fn reset(&mut self) -> io::Result<()> {
        self.out.reset()
    }

    pub fn print_rule(&mut self) -> io::Result<()> {
        self.set_dim()?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        self.reset()
    }

    fn print_heading(&mut self, heading: &str) -> io::Result<()> {
        self.set_bold()?;
        writeln!(self.out, "{}", heading)?;
        self.reset()
    }

    pub fn print_input(&mut self, text: &str) -> io::Result<()> {
        self.print_heading("## Plate, date and IP scan")?;
        writeln!(self.out)?;
        writeln!(self.out, "--- Input text ---")?;
        writeln!(self.out, "{}", text.trim())?;
        self.print_rule()
    }

    pub fn print_plates(&mut self, plates: &[String]) -> io::Result<()> {
        self.print_heading("### A. Region plates")?;

        if plates.is_empty() {
            self.set_color(Color::Red)?;
            write!(self.out, "✗")?;
            self.reset()?;
            writeln!(self.out, " No region plates found.")?;
        } else {
            self.set_color(Color::Green)?;
            write!(self.out, "✓")?;
            self.reset()?;
            writeln!(self.out, " Found {} region plates:", plates.len())?;
            for plate in plates {
                writeln!(self.out, "\t- {}", plate)?;
            }
        }

        self.print_rule()
    }

    pub fn print_patterns(&mut self, report: &PatternReport) -> io::Result<()> {
        self.print_heading("### B. All patterns")?;

        for entry in report {
            writeln!(self.out)?;
            if entry.error.is_some() {
                self.set_color(Color::Red)?;
            } else {
                self.set_color(Color::Cyan)?;
            }
            write!(self.out, "{}", entry.name)?;
            self.reset()?;
            writeln!(self.out, ": {} matches", entry.result.count)?;

            let examples = &entry.result.examples;
            if !examples.is_empty() {
                writeln!(
                    self.out,
                    "\tFirst {} examples: {}",
                    examples.len(),
                    examples.join(", ")
                )?;
            }
        }

        self.print_rule()
    }

    pub fn print_done(&mut self) -> io::Result<()> {
        writeln!(self.out, "Done.")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::{find_all_patterns, FinderConfig, Finder};
    use termcolor::Buffer;

    fn render(f: impl FnOnce(&mut Output<Buffer>) -> io::Result<()>) -> String {
        let mut output = Output::new(Buffer::no_color());
        f(&mut output).unwrap();
        String::from_utf8(output.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_input_is_trimmed() {
        let text = render(|o| o.print_input("\n   ВК0001АО   \n"));
        assert!(text.contains("--- Input text ---\nВК0001АО\n"));
        assert!(text.ends_with(&format!("{}\n", "-".repeat(35))));
    }

    #[test]
    fn test_plates_listed() {
        let plates = vec!["ВК0001АО".to_string(), "РК1234ВС".to_string()];
        let text = render(|o| o.print_plates(&plates));
        assert!(text.contains("✓ Found 2 region plates:\n\t- ВК0001АО\n\t- РК1234ВС\n"));
    }

    #[test]
    fn test_no_plates_message() {
        let text = render(|o| o.print_plates(&[]));
        assert!(text.contains("✗ No region plates found."));
    }

    #[test]
    fn test_pattern_sections() {
        let report = find_all_patterns("26.11.2025 and 01.01.2000", 2);
        let text = render(|o| o.print_patterns(&report));
        assert!(text.contains("Region plate: 0 matches\n"));
        assert!(text.contains("Date (DD.MM.YYYY): 2 matches\n\tFirst 2 examples: 26.11.2025, 01.01.2000\n"));
        assert!(text.contains("IP address: 0 matches\n"));
        assert!(!text.contains("First 0 examples"));
    }

    #[test]
    fn test_failed_pattern_shows_placeholder() {
        let finder = Finder::new(FinderConfig {
            timeout: std::time::Duration::ZERO,
            ..FinderConfig::default()
        });
        let report = finder.find_all_patterns("01.01.2000", 2);
        let text = render(|o| o.print_patterns(&report));
        assert!(text.contains("Date (DD.MM.YYYY): 0 matches\n\tFirst 1 examples: regex execution error\n"));
    }
}
