use clap::Args;
use tracing::instrument;

use qrkit::auth::{LoginRequest, SignupRequest};
use qrkit::{AppError, AppResult, AppState};

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[instrument(skip(state, args))]
pub async fn signup(state: &AppState, args: SignupArgs) -> AppResult<()> {
    let user = state
        .credentials()
        .signup(SignupRequest::new(args.name, args.email, args.password))
        .await?;
    println!("Thank you for signing up, {}!", user.name);
    println!("Your account {} has been created. Log in to continue.", user.email);
    Ok(())
}

#[instrument(skip(state, args))]
pub async fn login(state: &AppState, args: LoginArgs) -> AppResult<()> {
    let session = state
        .credentials()
        .login(&state.sessions(), LoginRequest::new(args.email, args.password))
        .await?;
    println!("Welcome back, {}!", session.user().name);
    Ok(())
}

pub async fn logout(state: &AppState) -> AppResult<()> {
    state.sessions().end().await?;
    println!("Logged out.");
    Ok(())
}

pub async fn whoami(state: &AppState) -> AppResult<()> {
    let session = state
        .sessions()
        .current()
        .await?
        .ok_or(AppError::NotAuthenticated)?;
    let user = session.user();
    println!("{} <{}>", user.name, user.email);
    Ok(())
}
