use qrcode::{render::unicode, QrCode};

use crate::error::{AppError, AppResult};

/// Turns a payload into something a camera can scan.
pub trait QrRenderer {
    type Output;

    fn render(&self, data: &str) -> AppResult<Self::Output>;
}

/// Reads a payload back out of an image. `None` when no code is present.
pub trait BarcodeDecoder {
    fn decode(&self, image: &[u8]) -> AppResult<Option<String>>;
}

/// Renders QR codes with Unicode half blocks for terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer {
    pub quiet_zone: bool,
}

impl QrRenderer for TerminalRenderer {
    type Output = String;

    fn render(&self, data: &str) -> AppResult<String> {
        let code = QrCode::new(data.as_bytes()).map_err(|e| AppError::Render(e.to_string()))?;
        Ok(code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .quiet_zone(self.quiet_zone)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_multiline_block() {
        let out = TerminalRenderer { quiet_zone: true }
            .render("https://example.com")
            .unwrap();
        assert!(out.lines().count() > 10);
    }

    #[test]
    fn oversized_payload_fails() {
        let data = "x".repeat(8000);
        let err = TerminalRenderer::default().render(&data).unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }
}
