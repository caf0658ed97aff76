//! relwatch CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use relwatch::cli::{Cli, CommandContext, CommandDispatcher};
use relwatch::config::{default_config_path, load_config, validate};
use relwatch::ui::{create_ui, is_ci};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so command output stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("relwatch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("relwatch=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("relwatch starting with args: {:?}", cli);

    let mut ui = create_ui(
        !is_ci(),
        cli.output_mode(),
        cli.assume_yes(),
        !cli.no_color,
    );

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = match load_config(&config_path).and_then(|config| {
        validate(&config)?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(2);
        }
    };

    let dispatcher = CommandDispatcher::new(CommandContext::new(config, config_path));

    match dispatcher.dispatch(&cli, ui.as_mut()).await {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
