use super::media_store::MediaStore;
use super::record::ExportRecord;
use crate::config::JPEG_QUALITY;
use crate::error::ExportError;
use crate::photo::Photo;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageResult};
use log::{error, info};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// A completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub display_name: String,
    pub location: PathBuf,
}

/// Encodes a photo as JPEG into `writer`.
pub fn encode_jpeg<W: Write>(photo: &Photo, writer: W, quality: u8) -> ImageResult<()> {
    JpegEncoder::new_with_quality(writer, quality).write_image(
        photo.pixels().as_raw(),
        photo.width(),
        photo.height(),
        ExtendedColorType::Rgb8,
    )
}

/// Saves photos into the media store as JPEG entries.
pub struct GalleryExporter {
    store: Arc<dyn MediaStore>,
    quality: u8,
}

impl GalleryExporter {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self {
            store,
            quality: JPEG_QUALITY,
        }
    }

    /// Saves `photo` under a record named after the current time.
    ///
    /// Blocking; the queue runs it on a worker thread.
    pub fn save(&self, photo: &Photo) -> Result<ExportOutcome, ExportError> {
        self.save_as(photo, ExportRecord::now())
    }

    /// Saves `photo` under an explicit record.
    pub fn save_as(&self, photo: &Photo, record: ExportRecord) -> Result<ExportOutcome, ExportError> {
        let result = self.write_entry(photo, &record);
        match &result {
            Ok(outcome) => info!(
                "Saved {} to {}",
                outcome.display_name,
                outcome.location.display()
            ),
            Err(e) => error!("Failed to save {}: {}", record.display_name, e),
        }
        result
    }

    fn write_entry(&self, photo: &Photo, record: &ExportRecord) -> Result<ExportOutcome, ExportError> {
        let Some(mut entry) = self.store.insert(record)? else {
            return Err(ExportError::NoTarget);
        };

        // The stream borrows the entry and is released before publishing.
        {
            let mut stream = entry.open_output_stream()?;
            encode_jpeg(photo, &mut stream, self.quality)?;
            stream.flush()?;
        }

        let location = entry.publish()?;
        Ok(ExportOutcome {
            display_name: record.display_name.clone(),
            location,
        })
    }
}
