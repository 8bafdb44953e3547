use std::process::ExitCode;

use clap::Parser;
use mealweek::cli::{Cli, INFRASTRUCTURE_EXIT_CODE, Outcome};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err:#}");

            ExitCode::from(INFRASTRUCTURE_EXIT_CODE)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let config = mealweek::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealweek::observability::init_observability(
        "mealweek",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        config.observability.json,
    )?;

    mealweek::cli::run(cli.command, &config).await
}
