pub mod render;
pub mod services;

pub use render::{BarcodeDecoder, QrRenderer, TerminalRenderer};
pub use services::{QrActions, QrOutcome};
