//! Menu exports: printable PDF and QR code for a restaurant.

use std::fmt;

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Pdf,
    Qr,
}

impl ExportKind {
    pub fn path(&self, restaurant: Id) -> String {
        match self {
            ExportKind::Pdf => format!("/api/restaurants/{}/menu_pdf/", restaurant),
            ExportKind::Qr => format!("/api/restaurants/{}/menu_qr/", restaurant),
        }
    }

    /// File name used when the caller gives no output path.
    pub fn default_file_name(&self, restaurant: Id) -> String {
        match self {
            ExportKind::Pdf => format!("menu_{}.pdf", restaurant),
            ExportKind::Qr => format!("menu_qr_{}.png", restaurant),
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportKind::Pdf => write!(f, "menu PDF"),
            ExportKind::Qr => write!(f, "menu QR code"),
        }
    }
}

impl ApiClient {
    pub async fn export(&self, kind: ExportKind, restaurant: Id) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&kind.path(restaurant)).await.map_err(|e| {
            tracing::error!("Failed to download {}: {}", kind, e);
            e
        })
    }
}
