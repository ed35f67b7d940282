use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

use crate::commands::{
    admin::AdminCommand,
    auth::{LoginArgs, SignupArgs},
    generate::GenerateCommand,
    history::HistoryCommand,
};
use qrkit::{AppResult, AppState};

#[derive(Debug, Parser)]
#[command(name = "qrkit", version, about = "Generate, scan and keep track of QR codes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an account
    Signup(SignupArgs),
    /// Log in and start a session on this device
    Login(LoginArgs),
    /// End the current session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Build a QR payload, render it and save it to history
    #[command(subcommand)]
    Generate(GenerateCommand),
    /// Record a payload read by a scanner
    Scan { data: String },
    /// List or delete saved codes
    #[command(subcommand)]
    History(HistoryCommand),
    /// Totals and the account directory
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "qrkit=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let state = AppState::init().await?;

    match dispatch(&state, cli.command).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn dispatch(state: &AppState, command: Command) -> AppResult<()> {
    match command {
        Command::Signup(args) => commands::auth::signup(state, args).await,
        Command::Login(args) => commands::auth::login(state, args).await,
        Command::Logout => commands::auth::logout(state).await,
        Command::Whoami => commands::auth::whoami(state).await,
        Command::Generate(cmd) => commands::generate::generate(state, cmd).await,
        Command::Scan { data } => commands::generate::scan(state, data).await,
        Command::History(cmd) => commands::history::run(state, cmd).await,
        Command::Admin(cmd) => commands::admin::run(state, cmd).await,
    }
}
