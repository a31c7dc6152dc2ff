//! User-visible feedback for export outcomes.

use super::queue::ExportResult;
use crate::error::ExportError;
use log::info;

pub const SAVED_MESSAGE: &str = "Image saved to gallery";
pub const FAILED_MESSAGE: &str = "Failed to save image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A short message shown briefly without requiring acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

/// Transient, non-blocking message surface.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Emits one notice for a finished export. Cancelled exports stay silent.
pub fn report_export(result: &ExportResult, notifier: &dyn Notifier) {
    match result {
        Ok(_) => notifier.notify(Notice::success(SAVED_MESSAGE)),
        Err(ExportError::Cancelled) => info!("Export cancelled; no notice shown"),
        Err(_) => notifier.notify(Notice::failure(FAILED_MESSAGE)),
    }
}
