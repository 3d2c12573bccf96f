use crate::finder::FinderConfig;
use crate::region::{Folding, REGION_CODES};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "platescan",
    about = "Find region-coded vehicle plates, dates and IP-shaped tokens in text",
    version
)]
pub struct Cli {
    /// Text to scan instead of the built-in sample
    #[arg(long)]
    pub text: Option<String>,

    /// Maximum number of examples shown per pattern
    #[arg(short, long, default_value_t = 2)]
    pub limit: usize,

    /// Allowed two-letter plate prefix (repeatable, replaces the default set)
    #[arg(long = "region", value_name = "CODE", value_parser = parse_region_code)]
    pub regions: Vec<String>,

    /// Treat Latin letters that look like Cyrillic ones as equal when checking prefixes
    #[arg(long)]
    pub fold_lookalikes: bool,

    /// Per-pattern matching timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub timeout_ms: u64,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_region_code(s: &str) -> Result<String, String> {
    if s.chars().count() == 2 && s.chars().all(char::is_alphabetic) {
        Ok(s.to_uppercase())
    } else {
        Err(format!("region code must be exactly two letters, got '{}'", s))
    }
}

impl Cli {
    pub fn finder_config(&self) -> FinderConfig {
        let region_codes = if self.regions.is_empty() {
            REGION_CODES.iter().map(|c| c.to_string()).collect()
        } else {
            self.regions.clone()
        };

        FinderConfig {
            timeout: Duration::from_millis(self.timeout_ms),
            folding: if self.fold_lookalikes {
                Folding::Lookalike
            } else {
                Folding::Exact
            },
            region_codes,
        }
    }
}
