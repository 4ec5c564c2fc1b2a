pub mod api;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod gateway;
pub mod http;
pub mod scoring;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, shells};

use crate::cli::{Cli, Command, CompletionShell};
use crate::config::settings::AppConfig;
use crate::gateway::{HttpGateway, SqliteGateway};
use crate::services::server::ServerService;
use crate::store::Store;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_completions(shell: CompletionShell) -> Result<()> {
    let mut command = Cli::command();
    let mut stdout = std::io::stdout();
    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut command, "golf", &mut stdout),
        CompletionShell::Zsh => generate(shells::Zsh, &mut command, "golf", &mut stdout),
        CompletionShell::Fish => generate(shells::Fish, &mut command, "golf", &mut stdout),
    }
    Ok(())
}

/// Run a data command against the local database, or the server when `remote`
pub fn handle_command(remote: bool, command: &Command) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        if remote {
            let gateway = HttpGateway::new(&config.gateway)?;
            commands::run(&Store::new(gateway, config), command).await
        } else {
            let gateway = SqliteGateway::open(&config.database_path)?;
            commands::run(&Store::new(gateway, config), command).await
        }
    })
}
