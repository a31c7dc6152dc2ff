//! Loading photo sets for the list.
//!
//! Uses `rayon::spawn` for scanning and decoding, then
//! `slint::invoke_from_event_loop` to hand the photos to the model on the UI thread.

use crate::file_utils;
use crate::image_loader::{self, LoadReport};
use crate::ui::photo_model::PhotoGridModel;
use crate::ui::{set_error_with_prefix, set_photo_status};
use log::{debug, info, warn};
use slint::{ComponentHandle, Model};
use std::path::PathBuf;

/// Runs `f` with the photo model installed in the window.
pub fn with_photo_model<R>(ui: &crate::AppWindow, f: impl FnOnce(&PhotoGridModel) -> R) -> Option<R> {
    let photos = ui.global::<crate::GalleryState>().get_photos();
    photos.as_any().downcast_ref::<PhotoGridModel>().map(f)
}

fn apply_report(ui: &crate::AppWindow, generation: u64, report: LoadReport) {
    let failed = report.failures.len();
    let shown = with_photo_model(ui, |model| {
        model
            .apply_load(generation, report.photos)
            .then(|| model.photo_count())
    });

    if let Some(Some(shown)) = shown {
        info!("Showing {} photo(s), {} failed to load", shown, failed);
        set_photo_status(ui, shown, failed);
    }
}

/// Scans `inputs` (folders or image files) and decodes them in the background,
/// replacing the displayed photos when done.
///
/// A later load or a clear supersedes this one; its result is then dropped.
pub fn load_photos_in_background(
    ui: slint::Weak<crate::AppWindow>,
    inputs: Vec<PathBuf>,
    error_prefix: &'static str,
) {
    let Some(generation) = ui
        .upgrade()
        .and_then(|ui| with_photo_model(&ui, PhotoGridModel::begin_load))
    else {
        warn!("No photo list to load into");
        return;
    };

    debug!("Loading photos from {:?} (load #{})", inputs, generation);
    rayon::spawn(move || {
        let result = file_utils::collect_image_paths(&inputs).map(|paths| image_loader::load_photos(&paths));

        let _ = slint::invoke_from_event_loop(move || {
            if let Some(ui) = ui.upgrade() {
                match result {
                    Ok(report) => apply_report(&ui, generation, report),
                    Err(e) => {
                        if with_photo_model(&ui, |model| model.is_current_load(generation)) == Some(true) {
                            set_error_with_prefix(&ui, error_prefix, e.to_string());
                        }
                    }
                }
            }
        });
    });
}
