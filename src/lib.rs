//! Local QR code toolkit: accounts, a single device session, payload
//! formatting and per-user scan/generate history over a key-value store.

pub mod admin;
pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod history;
pub mod payload;
pub mod qr;
pub mod state;
pub mod storage;

pub use error::{AppError, AppResult, StorageError};
pub use state::AppState;
