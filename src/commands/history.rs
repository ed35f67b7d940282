use clap::Subcommand;
use time::format_description::well_known::Rfc3339;

use qrkit::{AppError, AppResult, AppState};

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// Show saved codes, newest first
    List,
    /// Delete one entry by id
    Remove { id: i64 },
    /// Delete every entry
    Clear,
}

pub async fn run(state: &AppState, cmd: HistoryCommand) -> AppResult<()> {
    let session = state
        .sessions()
        .current()
        .await?
        .ok_or(AppError::NotAuthenticated)?;
    let ledger = state.history();

    match cmd {
        HistoryCommand::List => {
            let entries = ledger.list(session.email()).await?;
            if entries.is_empty() {
                println!("No history yet. Generate or scan a QR code to get started.");
            }
            for entry in entries {
                let kind = if entry.scanned { "Scanned" } else { "Generated" };
                let date = entry.date.format(&Rfc3339).unwrap_or_default();
                println!("#{} {kind} {date}", entry.id);
                println!("    {}", entry.data.replace('\n', "\n    "));
            }
        }
        HistoryCommand::Remove { id } => {
            ledger.remove(session.email(), id).await?;
            println!("Deleted #{id}.");
        }
        HistoryCommand::Clear => {
            ledger.clear(session.email()).await?;
            println!("All history has been cleared.");
        }
    }
    Ok(())
}
