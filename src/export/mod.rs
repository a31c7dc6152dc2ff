//! Saving photos into the shared pictures collection.
//!
//! `GalleryExporter` does the blocking encode-and-write; `ExportQueue` moves it
//! off the event thread and hands back a one-shot completion.

pub mod exporter;
pub mod media_store;
pub mod notice;
pub mod queue;
pub mod record;

pub use exporter::GalleryExporter;
pub use media_store::FsMediaStore;
pub use notice::{Notice, NoticeKind, Notifier, report_export};
pub use queue::ExportQueue;
