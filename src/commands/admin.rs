use clap::Subcommand;
use time::macros::format_description;

use qrkit::{AppResult, AppState};

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Totals across every account
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Registered accounts, oldest first
    Users,
}

pub async fn run(state: &AppState, cmd: AdminCommand) -> AppResult<()> {
    let admin = state.admin();
    match cmd {
        AdminCommand::Stats { json } => {
            let stats = admin.compute_stats().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats).map_err(qrkit::StorageError::from)?);
            } else {
                println!("Total users:         {}", stats.total_users);
                println!("New users this week: {}", stats.new_users_this_week);
                println!("Total QR codes:      {}", stats.total_qr_codes);
            }
        }
        AdminCommand::Users => {
            let users = admin.list_users().await?;
            if users.is_empty() {
                println!("No users registered yet.");
            }
            let day = format_description!("[year]-[month]-[day]");
            for user in users {
                let joined = user.signup_date.format(&day).unwrap_or_default();
                println!("{} <{}> joined {joined}", user.name, user.email);
            }
        }
    }
    Ok(())
}
