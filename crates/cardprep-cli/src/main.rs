//! cardprep binary entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use cardprep_cli::cli::{Cli, Command};
use cardprep_cli::commands::{RunOptions, run_documents, scope_documents};
use cardprep_cli::config_handlers::handle_config_command;
use cardprep_cli::ConfigStore;
use cardprep_content::Pipeline;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Config { action } => {
            handle_config_command(config_path, action)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Run(args) => {
            let pipeline = load_pipeline(config_path)?;
            let options = RunOptions {
                vault: args.vault,
                dry_run: args.dry_run,
                check: args.check,
            };
            let summary = run_documents(&pipeline, &args.files, &options);

            if summary.failed > 0 || (options.check && summary.modified > 0) {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
        Command::Scope(args) => {
            let pipeline = load_pipeline(config_path)?;
            let failed = scope_documents(&pipeline, &args.files, args.vault.as_deref());
            Ok(if failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn load_pipeline(config_path: Option<&str>) -> anyhow::Result<Pipeline> {
    let store = ConfigStore::resolve(config_path)?;
    let config = store
        .load()
        .with_context(|| format!("loading {}", store.path().display()))?;
    if !config.any_enabled() {
        tracing::warn!("All components are disabled; notes will be left unchanged");
    }
    Ok(Pipeline::new(config)?)
}
