//! Helper functions to set groups of GalleryState properties.

use log::error;
use slint::ComponentHandle;

/// Sets the status line from the number of shown photos and load failures.
pub fn set_photo_status(ui: &crate::AppWindow, shown: usize, failed: usize) {
    let message = match (shown, failed) {
        (0, 0) => String::new(),
        (shown, 0) => format!("{} photo(s)", shown),
        (shown, failed) => format!("{} photo(s), {} failed to load", shown, failed),
    };
    ui.global::<crate::GalleryState>()
        .set_status_message(message.into());
}

/// Sets an error message in the status line with a prefix.
///
/// Logs the error as well.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::GalleryState>()
        .set_status_message(error_message.into());
}
