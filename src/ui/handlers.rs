//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (open_folder, clear_photos, photo_tapped, etc.)
//! using the appropriate threading model for each operation type.

use crate::state::AppState;
use crate::ui::photo_loading::load_photos_in_background;
use crate::ui::set_photo_status;
use crate::viewer::Focus;
use log::warn;
use rfd::AsyncFileDialog;
use slint::{ComponentHandle, ModelRc};

fn row_index(index: i32) -> Option<usize> {
    let row = usize::try_from(index).ok();
    if row.is_none() {
        warn!("Ignoring tap on invalid row {}", index);
    }
    row
}

/// Sets up all UI event handlers for the application.
///
/// Installs the photo model, then registers callbacks for folder selection,
/// clearing, row taps and overlay dismissal.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState) {
    ui.global::<crate::GalleryState>()
        .set_photos(ModelRc::from(state.photos.clone()));

    // Folder selection handler
    // AsyncFileDialog must run on the main thread, so it uses slint::spawn_local.
    ui.global::<crate::Logic>().on_open_folder({
        let ui_handle = ui.as_weak();
        move || {
            let ui_handle = ui_handle.clone();
            let _ = slint::spawn_local(async move {
                let Some(folder) = AsyncFileDialog::new().pick_folder().await else {
                    if let Some(ui) = ui_handle.upgrade() {
                        ui.global::<crate::GalleryState>()
                            .set_status_message("No folder selected".into());
                    }
                    return;
                };

                load_photos_in_background(
                    ui_handle,
                    vec![folder.path().to_path_buf()],
                    "Failed to load folder",
                );
            });
        }
    });

    ui.global::<crate::Logic>().on_clear_photos({
        let ui_handle = ui.as_weak();
        let photos = state.photos.clone();
        move || {
            photos.clear_images();
            if let Some(ui) = ui_handle.upgrade() {
                set_photo_status(&ui, 0, 0);
            }
        }
    });

    ui.global::<crate::Logic>().on_photo_tapped({
        let photos = state.photos.clone();
        move |index| {
            if let Some(row) = row_index(index) {
                photos.tap_image(row);
            }
        }
    });

    ui.global::<crate::Logic>().on_save_tapped({
        let photos = state.photos.clone();
        move |index| {
            if let Some(row) = row_index(index) {
                photos.tap_save(row);
            }
        }
    });

    ui.global::<crate::Logic>().on_overlay_tapped({
        let viewer = state.viewer.clone();
        move || {
            let mut viewer = viewer.borrow_mut();
            if viewer.focus() == Focus::Screen {
                warn!("Overlay tapped while none is open");
                return;
            }
            viewer.tap();
        }
    });
}
