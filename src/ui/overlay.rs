//! Full-screen overlay drawn by the main window.

use crate::image_loader::create_slint_image;
use crate::photo::Photo;
use crate::viewer::OverlaySurface;
use slint::ComponentHandle;

pub struct SlintOverlay {
    ui: slint::Weak<crate::AppWindow>,
}

impl SlintOverlay {
    pub fn new(ui: slint::Weak<crate::AppWindow>) -> Self {
        Self { ui }
    }
}

impl OverlaySurface for SlintOverlay {
    fn present(&self, photo: &Photo) {
        if let Some(ui) = self.ui.upgrade() {
            let state = ui.global::<crate::GalleryState>();
            state.set_overlay_image(create_slint_image(photo));
            state.set_overlay_visible(true);
        }
    }

    fn dismiss(&self) {
        if let Some(ui) = self.ui.upgrade() {
            let state = ui.global::<crate::GalleryState>();
            state.set_overlay_visible(false);
            state.set_overlay_image(slint::Image::default());
        }
    }
}
