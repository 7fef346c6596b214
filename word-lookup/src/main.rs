use std::{io::Write, process::ExitCode};

use args::{normalize_help_flag, Args};
use clap::Parser;
use dictionary::Dictionary;
use runner::{run, Config};
use tracing_subscriber::EnvFilter;

mod args;
mod output;
mod runner;
mod word_list;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse_from(normalize_help_flag(std::env::args_os()));
    let config = Config {
        filename: args.filename,
        synonyms: args.synonyms,
        antonyms: args.antonyms,
    };
    let dict = Dictionary::with_base_url(args.api_url);

    let mut stdout = std::io::stdout().lock();
    let result = run(&config, &dict, &mut stdout).await;
    ExitCode::from(report(result, &mut stdout))
}

/// Prints the diagnostic for a failed run and returns the process exit status.
fn report(result: anyhow::Result<()>, out: &mut impl Write) -> u8 {
    let Err(error) = result else {
        return 0;
    };
    tracing::debug!(?error, "word lookup aborted");
    let message = diagnostic(&error);
    if let Err(write_error) = writeln!(out, "\n{message}") {
        eprintln!("{message} (stdout unavailable: {write_error})");
    }
    1
}

/// The outermost context followed by the root cause, skipping the layers in between.
fn diagnostic(error: &anyhow::Error) -> String {
    if error.chain().count() == 1 {
        error.to_string()
    } else {
        format!("{error}: {}", error.root_cause())
    }
}
