//! Decoded in-memory photo shared between the list, the viewer and exports.

use image::RgbImage;
use std::sync::Arc;

/// A decoded RGB8 raster.
///
/// Cloning is cheap: the pixel buffer is reference counted, so rows, the
/// full-screen overlay and export workers all see the same pixels.
#[derive(Clone, Debug)]
pub struct Photo {
    pixels: Arc<RgbImage>,
}

impl Photo {
    pub fn new(pixels: RgbImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }

    /// Returns true when both handles refer to the same decoded buffer.
    pub fn ptr_eq(&self, other: &Photo) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

#[cfg(test)]
pub(crate) fn solid_photo(width: u32, height: u32, rgb: [u8; 3]) -> Photo {
    Photo::new(RgbImage::from_pixel(width, height, image::Rgb(rgb)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_pixels() {
        let photo = solid_photo(4, 3, [1, 2, 3]);
        let clone = photo.clone();
        let other = solid_photo(4, 3, [1, 2, 3]);

        assert!(photo.ptr_eq(&clone));
        assert!(!photo.ptr_eq(&other));
        assert_eq!((clone.width(), clone.height()), (4, 3));
    }
}
