use anyhow::Result;
use clap::Parser;
use standchart::cli::{Cli, Commands};
use standchart::commands::{self, CatalogConfig, RevealConfig};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status for a rejected URL or an out-of-range level under `reject`
const EXIT_BAD_INPUT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Bad input exits with 2; missing files, broken config and the like with 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<standchart::Error>() {
        Some(e) if e.is_user_input() => EXIT_BAD_INPUT,
        _ => 1,
    }
}

// Main orchestrator function
fn run(cli: Cli) -> Result<()> {
    let formatting_config = cli.formatting_config();

    match cli.command {
        Commands::Reveal {
            url,
            catalog,
            config,
            svg,
            format,
            chart_subject,
        } => {
            let reveal_config = RevealConfig {
                url,
                catalog,
                config,
                svg,
                format,
                chart_subject,
                formatting_config,
            };
            commands::handle_reveal(reveal_config, std::io::stdout().lock())?;
            Ok(())
        }
        Commands::Init { force } => commands::init_config(force),
        Commands::Catalog {
            catalog,
            config,
            format,
        } => {
            let catalog_config = CatalogConfig {
                catalog,
                config,
                format,
                formatting_config,
            };
            commands::list_catalog(catalog_config, std::io::stdout().lock())
        }
    }
}

fn default_log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("standchart={}", default_log_level(verbosity))));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
