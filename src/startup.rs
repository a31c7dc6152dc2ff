use slint::ComponentHandle;
use std::path::PathBuf;

use crate::ui::photo_loading::load_photos_in_background;

fn startup_inputs_from_args() -> Vec<PathBuf> {
    std::env::args_os()
        .skip(1)
        .filter_map(|arg| {
            let arg_str = arg.to_string_lossy();
            if arg_str.starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .filter(|path| path.is_dir() || crate::file_utils::is_supported_image(path))
        .collect()
}

/// Loads folders or image files given on the command line.
pub fn configure_startup_loading(app: &crate::AppWindow) {
    let inputs = startup_inputs_from_args();
    if inputs.is_empty() {
        return;
    }

    log::info!("Loading {} startup input(s)", inputs.len());
    load_photos_in_background(app.as_weak(), inputs, "Failed to load startup photos");
}
