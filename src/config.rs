//! Application configuration constants and directory resolution.

use std::path::PathBuf;
use std::time::Duration;

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Prefix of every exported file name.
pub const EXPORT_NAME_PREFIX: &str = "PhotoViewer_";

/// Suffix of every exported file name.
pub const EXPORT_NAME_SUFFIX: &str = ".jpg";

/// MIME type recorded for exported entries.
pub const EXPORT_MIME_TYPE: &str = "image/jpeg";

/// Application subfolder inside the pictures directory.
pub const EXPORT_SUBFOLDER: &str = "PhotoViewer";

/// JPEG quality used for exports (maximum).
pub const JPEG_QUALITY: u8 = 100;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(2000);

/// Number of bound rows kept for recycling by the list model.
pub const ROW_POOL_CAPACITY: usize = 32;

/// Worker threads dedicated to JPEG export.
pub const EXPORT_THREADS: usize = 1;

/// How long shutdown waits for a running export to finish.
pub const EXPORT_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable overriding the pictures directory.
pub const ENV_PICTURES_DIR: &str = "PHOTO_VIEWER_PICTURES_DIR";

/// Returns the pictures directory exports are written under.
///
/// # Resolution Order
///
/// 1. Explicit override
/// 2. `PHOTO_VIEWER_PICTURES_DIR` (ignored when empty)
/// 3. The platform pictures directory
/// 4. `$HOME/Pictures`
pub fn pictures_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_PICTURES_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::picture_dir().or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
}

/// Returns the pictures directory using the default resolution order.
pub fn pictures_dir() -> Option<PathBuf> {
    pictures_dir_with_override(None)
}
