//! Murmur CLI - local speech-to-text transcription

use clap::Parser;
use eyre::Result;
use murmur::cli::{Cli, run_cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The model hub is the one capability nothing works without; probe it
    // before touching the arguments.
    if let Err(e) = murmur_asr::hub::probe() {
        println!("{}", murmur::report::dependency_error_json(&e.to_string()));
        std::process::exit(1);
    }

    run_cli(Cli::parse())
}
