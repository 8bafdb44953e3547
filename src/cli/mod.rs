mod generate;
mod migrate;
mod seed;
mod validate;

pub use generate::*;
pub use migrate::*;
pub use seed::*;
pub use validate::*;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::Config;

/// mealweek - deterministic weekly meal plans
#[derive(Parser, Debug)]
#[command(name = "mealweek")]
#[command(about = "Deterministic 7 day meal plans and catalog audits", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a plan and print it as JSON
    Generate(GenerateArgs),
    /// Audit the catalog or persisted plans
    Validate {
        #[arg(value_enum)]
        target: AuditTarget,
    },
    /// Run database migrations
    Migrate,
    /// Load catalog seed data into the database
    Seed {
        /// Seed JSON file (ingredients and meals)
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    /// 0 on success, 1 when an audit found violations.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Passed => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::from(1),
        }
    }
}

/// Exit code for configuration, store or I/O failures.
pub const INFRASTRUCTURE_EXIT_CODE: u8 = 2;

pub async fn run(command: Commands, config: &Config) -> anyhow::Result<Outcome> {
    match command {
        Commands::Generate(args) => {
            let plan = generate(config, &args).await?;
            println!("{}", serde_json::to_string_pretty(&plan)?);

            Ok(Outcome::Passed)
        }
        Commands::Validate { target } => {
            let report = validate(config, target).await?;

            Ok(if report.passed() {
                Outcome::Passed
            } else {
                Outcome::Failed
            })
        }
        Commands::Migrate => {
            migrate(config).await?;

            Ok(Outcome::Passed)
        }
        Commands::Seed { file } => {
            seed(config, &file).await?;

            Ok(Outcome::Passed)
        }
    }
}
