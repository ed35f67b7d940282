pub mod dto;
pub mod services;

pub use dto::{PayloadRequest, VCardFields};
pub use services::{format, format_text, format_url, format_vcard};
