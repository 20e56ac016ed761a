pub mod commands;

use clap::{Parser, Subcommand};

use crate::items::ItemPermission;

#[derive(Parser)]
#[command(name = "items-api")]
#[command(about = "Items API - menu item CRUD service with permission-gated writes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides ITEMS_API_PORT)")]
        port: Option<u16>,
    },

    #[command(about = "Print a signed token for the configured JWT secret")]
    Token {
        #[arg(long, default_value = "dev-user", help = "Token subject")]
        subject: String,
        #[arg(long = "permission", help = "Permission to grant, e.g. create:items (repeatable)")]
        permissions: Vec<ItemPermission>,
        #[arg(long, help = "Grant every item permission")]
        all: bool,
        #[arg(long, help = "Lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
        expires_in_hours: Option<i64>,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(port).await,
        Commands::Token {
            subject,
            permissions,
            all,
            expires_in_hours,
        } => {
            let permissions = if all { ItemPermission::ALL.to_vec() } else { permissions };
            commands::token::handle(subject, permissions, expires_in_hours)
        }
    }
}
