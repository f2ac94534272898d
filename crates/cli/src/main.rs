use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use discslug_cli::args::{self, Cli};
use discslug_cli::config::Config;
use discslug_cli::resolver::Resolver;
use discslug_core::UsageError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// Single lookup, awaited in order: no worker threads needed.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Ok(usage_failure(&args::usage_error(&e))),
    };

    init_tracing(cli.verbose)?;

    let request = match cli.into_request() {
        Ok(request) => request,
        Err(e) => return Ok(usage_failure(&e)),
    };

    let config = Config::from_env();
    debug!(?config, ?request, "resolving");

    let resolver = Resolver::from_config(&config).context("failed to build OMDb client")?;
    let slug = resolver.resolve(&request).await;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{slug}").context("failed to write slug")?;

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the slug.
    let default_filter = if verbose {
        "warn,discslug_cli=debug,discslug_metadata=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

fn usage_failure(err: &UsageError) -> ExitCode {
    eprintln!("error: {err}");
    eprintln!();
    eprintln!("{}", args::usage());
    ExitCode::from(err.exit_code())
}
