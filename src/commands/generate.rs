use clap::{Args, Subcommand};
use tracing::{instrument, warn};

use qrkit::payload::{PayloadRequest, VCardFields};
use qrkit::qr::{QrOutcome, TerminalRenderer};
use qrkit::{AppResult, AppState};

#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Encode plain text
    Text { text: String },
    /// Encode a web address
    Url { url: String },
    /// Encode a contact card
    Vcard(VCardArgs),
}

#[derive(Debug, Args)]
pub struct VCardArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub website: String,
}

impl From<GenerateCommand> for PayloadRequest {
    fn from(cmd: GenerateCommand) -> Self {
        match cmd {
            GenerateCommand::Text { text } => PayloadRequest::Text { text },
            GenerateCommand::Url { url } => PayloadRequest::Url { url },
            GenerateCommand::Vcard(v) => PayloadRequest::VCard(VCardFields {
                name: v.name,
                phone: v.phone,
                email: v.email,
                company: v.company,
                title: v.title,
                website: v.website,
            }),
        }
    }
}

#[instrument(skip(state, cmd))]
pub async fn generate(state: &AppState, cmd: GenerateCommand) -> AppResult<()> {
    let request = PayloadRequest::from(cmd);
    let (outcome, code) = state
        .qr()
        .generate_rendered(&TerminalRenderer { quiet_zone: true }, &request)
        .await?;
    println!("{code}");
    println!("{}", outcome.payload);
    report(&outcome);
    Ok(())
}

/// Records a payload decoded by an external scanner.
#[instrument(skip(state, data))]
pub async fn scan(state: &AppState, data: String) -> AppResult<()> {
    let outcome = state.qr().record_scan(&data).await?;
    println!("QR Code Scanned: {}", outcome.payload);
    report(&outcome);
    Ok(())
}

fn report(outcome: &QrOutcome) {
    match &outcome.entry {
        Some(entry) => println!("Saved to history (#{}).", entry.id),
        None => warn!("not saved to history; log in to keep a history"),
    }
}
