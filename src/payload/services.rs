use url::Url;

use crate::error::{AppError, AppResult};
use crate::payload::dto::{PayloadRequest, VCardFields};

pub fn format_text(s: &str) -> AppResult<String> {
    let text = s.trim();
    if text.is_empty() {
        return Err(AppError::validation("Please enter text to generate QR code."));
    }
    Ok(text.to_string())
}

/// Accepts absolute URLs with both a scheme and a host.
pub fn format_url(s: &str) -> AppResult<String> {
    let raw = s.trim();
    if raw.is_empty() {
        return Err(AppError::validation("Please enter a URL to generate QR code."));
    }
    match Url::parse(raw) {
        Ok(parsed) if parsed.host().is_some() => Ok(raw.to_string()),
        _ => Err(AppError::validation("Please enter a valid URL.")),
    }
}

pub fn format_vcard(fields: &VCardFields) -> AppResult<String> {
    if fields.is_empty() {
        return Err(AppError::validation("Please enter at least one vCard field."));
    }

    let tagged = [
        ("FN", &fields.name),
        ("TITLE", &fields.title),
        ("ORG", &fields.company),
        ("TEL;TYPE=WORK,VOICE", &fields.phone),
        ("EMAIL", &fields.email),
        ("URL", &fields.website),
    ];

    let mut lines = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];
    lines.extend(
        tagged
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(tag, value)| format!("{tag}:{value}")),
    );
    lines.push("END:VCARD".to_string());
    Ok(lines.join("\n"))
}

pub fn format(request: &PayloadRequest) -> AppResult<String> {
    match request {
        PayloadRequest::Text { text } => format_text(text),
        PayloadRequest::Url { url } => format_url(url),
        PayloadRequest::VCard(fields) => format_vcard(fields),
    }
}
