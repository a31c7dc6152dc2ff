//! Decoding photos from disk and converting them for display.

use crate::error::{AppError, Result};
use crate::photo::Photo;
use log::{debug, warn};
use rayon::prelude::*;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::{Path, PathBuf};

/// Decodes an image file into a `Photo`.
///
/// Blocking; call from a worker thread.
pub fn load_photo_blocking(path: &Path) -> Result<Photo> {
    let image = image::ImageReader::open(path)
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| AppError::ImageLoad(format!("{}: {}", path.display(), e)))?
        .decode()?;

    Ok(Photo::new(image.to_rgb8()))
}

/// Outcome of loading a batch of files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Decoded photos in the same order as the input paths.
    pub photos: Vec<Photo>,
    /// Files that could not be decoded.
    pub failures: Vec<(PathBuf, AppError)>,
}

/// Decodes every path in parallel, keeping input order for the successes.
pub fn load_photos(paths: &[PathBuf]) -> LoadReport {
    let start = std::time::Instant::now();
    let results: Vec<(PathBuf, Result<Photo>)> = paths
        .par_iter()
        .map(|path| (path.clone(), load_photo_blocking(path)))
        .collect();

    let mut report = LoadReport::default();
    for (path, result) in results {
        match result {
            Ok(photo) => report.photos.push(photo),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                report.failures.push((path, e));
            }
        }
    }

    debug!(
        "Loaded {} photo(s), {} failure(s) in {:?}",
        report.photos.len(),
        report.failures.len(),
        start.elapsed()
    );
    report
}

/// Converts a photo into a Slint image.
pub fn create_slint_image(photo: &Photo) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(
        photo.pixels().as_raw(),
        photo.width(),
        photo.height(),
    );
    Image::from_rgb8(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    #[test]
    fn loads_images_in_input_order_and_reports_failures() {
        let dir = TempDir::new().expect("tempdir");
        let first = dir.path().join("first.png");
        let broken = dir.path().join("broken.jpg");
        let second = dir.path().join("second.png");

        ImageBuffer::from_fn(8, 4, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]))
            .save(&first)
            .expect("save");
        std::fs::write(&broken, b"not an image").expect("write");
        ImageBuffer::from_fn(3, 5, |_x, _y| Rgb([1_u8, 2_u8, 3_u8]))
            .save(&second)
            .expect("save");

        let report = load_photos(&[first, broken.clone(), second]);

        assert_eq!(report.photos.len(), 2);
        assert_eq!((report.photos[0].width(), report.photos[0].height()), (8, 4));
        assert_eq!((report.photos[1].width(), report.photos[1].height()), (3, 5));
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, broken);
    }

    #[test]
    fn missing_file_is_an_image_load_error() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_photo_blocking(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, AppError::ImageLoad(_)));
    }
}
