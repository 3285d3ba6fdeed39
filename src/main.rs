use std::io;
use std::time::Duration;

use anyhow::Context;
use bookcase::cli::{Cli, Command};
use bookcase::config::Config;
use bookcase::logging::{init_tracing, LogTarget};
use bookcase::{commands, ui};
use clap::Parser;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?.with_overrides(cli.overrides())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = match &cli.command {
        None => {
            init_tracing(&config.logging, LogTarget::file_for(&config.logging))
                .context("Failed to open log file")?;
            ui::run(&config, runtime.handle()).context("Terminal UI failed")
        }
        Some(command @ Command::List { .. }) => {
            init_tracing(&config.logging, LogTarget::Stderr)?;
            let query = command.query().unwrap_or_default();
            commands::list(&config, runtime.handle(), &query, &mut io::stdout().lock())
        }
        Some(Command::Show { number }) => {
            init_tracing(&config.logging, LogTarget::Stderr)?;
            commands::show(&config, runtime.handle(), *number, &mut io::stdout().lock())
        }
    };

    // Don't wait on a fetch the user quit before.
    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}
