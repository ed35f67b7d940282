use tracing::{error, info, instrument};

use crate::auth::SessionManager;
use crate::error::{AppError, AppResult};
use crate::history::{HistoryEntry, HistoryLedger};
use crate::payload::{self, PayloadRequest};
use crate::qr::render::{BarcodeDecoder, QrRenderer};

/// Result of a generate or scan action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOutcome {
    pub payload: String,
    /// `None` when nobody is logged in or the history write failed.
    pub entry: Option<HistoryEntry>,
}

/// The generate and scan flows: payload, then session, then history.
#[derive(Clone)]
pub struct QrActions {
    sessions: SessionManager,
    history: HistoryLedger,
}

impl QrActions {
    pub fn new(sessions: SessionManager, history: HistoryLedger) -> Self {
        Self { sessions, history }
    }

    #[instrument(skip(self, request))]
    pub async fn generate(&self, request: &PayloadRequest) -> AppResult<QrOutcome> {
        let payload = payload::format(request)?;
        let entry = self.record(&payload, false).await;
        Ok(QrOutcome { payload, entry })
    }

    /// Formats and renders before anything is recorded, so a payload that
    /// cannot become a QR code leaves history untouched.
    #[instrument(skip(self, renderer, request))]
    pub async fn generate_rendered<R: QrRenderer>(
        &self,
        renderer: &R,
        request: &PayloadRequest,
    ) -> AppResult<(QrOutcome, R::Output)> {
        let payload = payload::format(request)?;
        let rendered = renderer.render(&payload)?;
        let entry = self.record(&payload, false).await;
        Ok((QrOutcome { payload, entry }, rendered))
    }

    #[instrument(skip(self, data))]
    pub async fn record_scan(&self, data: &str) -> AppResult<QrOutcome> {
        if data.is_empty() {
            return Err(AppError::validation("No QR code data to record."));
        }
        let entry = self.record(data, true).await;
        Ok(QrOutcome {
            payload: data.to_string(),
            entry,
        })
    }

    /// `Ok(None)` when the image holds no QR code.
    pub async fn scan_image<D: BarcodeDecoder>(
        &self,
        decoder: &D,
        image: &[u8],
    ) -> AppResult<Option<QrOutcome>> {
        match decoder.decode(image)? {
            Some(data) => self.record_scan(&data).await.map(Some),
            None => {
                info!(bytes = image.len(), "no QR code found in image");
                Ok(None)
            }
        }
    }

    // History is best effort: a failed write must not hide the payload.
    async fn record(&self, payload: &str, scanned: bool) -> Option<HistoryEntry> {
        let session = match self.sessions.current().await {
            Ok(Some(s)) => s,
            Ok(None) => return None,
            Err(e) => {
                error!(error = %e, "session lookup failed");
                return None;
            }
        };
        match self.history.append(session.email(), payload, scanned).await {
            Ok(entry) => Some(entry),
            Err(e) => {
                error!(error = %e, email = %session.email(), "saving to history failed");
                None
            }
        }
    }
}
