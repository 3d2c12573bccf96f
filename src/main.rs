use clap::Parser;
use platescan::cli::Cli;
use platescan::demo::DEMO_TEXT;
use platescan::finder::Finder;
use platescan::output::Output;

fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();

    // Diagnostics share stdout with the report so they appear in sequence.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .init();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::stdout(use_color);

    let text = cli.text.as_deref().unwrap_or(DEMO_TEXT);
    let finder = Finder::new(cli.finder_config());

    output.print_input(text)?;

    let plates = finder.find_region_plates(text);
    output.print_plates(&plates)?;

    let report = finder.find_all_patterns(text, cli.limit);
    output.print_patterns(&report)?;

    output.print_done()?;
    Ok(())
}
