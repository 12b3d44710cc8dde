use std::process;

use clap::Parser;
use release_notes::config::RunConfig;
use release_notes::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config = match cli.run_config() {
        Ok(config) => config,
        Err(e) => report_and_exit(&e),
    };

    init_tracing(&config);

    if let Err(e) = cli.execute(&config) {
        report_and_exit(&e);
    }
}

// Logs go to stderr so they never mix with the note on stdout
fn init_tracing(config: &RunConfig) {
    let filter = if config.debug {
        EnvFilter::new("release_notes=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn report_and_exit(e: &anyhow::Error) -> ! {
    eprintln!("Error: {e}");

    let mut source = e.source();
    while let Some(err) = source {
        eprintln!("  Caused by: {err}");
        source = err.source();
    }

    process::exit(1);
}
