//! Row tap actions wired to the viewer and the export queue.

use crate::adapter::RowActions;
use crate::export::{ExportQueue, report_export};
use crate::photo::Photo;
use crate::ui::overlay::SlintOverlay;
use crate::ui::toast::ToastNotifier;
use crate::viewer::FullScreenViewer;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

pub struct ScreenActions {
    viewer: Rc<RefCell<FullScreenViewer<SlintOverlay>>>,
    exports: ExportQueue,
    notifier: ToastNotifier,
}

impl ScreenActions {
    pub fn new(
        viewer: Rc<RefCell<FullScreenViewer<SlintOverlay>>>,
        exports: ExportQueue,
        notifier: ToastNotifier,
    ) -> Self {
        Self {
            viewer,
            exports,
            notifier,
        }
    }
}

impl RowActions for ScreenActions {
    fn open_full_screen(&self, photo: Photo) {
        let mut viewer = self.viewer.borrow_mut();
        if let Some(open) = viewer.current_photo() {
            debug!("Replacing the open {}x{} overlay", open.width(), open.height());
        }
        viewer.show(photo);
    }

    /// Encodes and writes on a worker; the notice is shown back on the event loop.
    fn save_to_gallery(&self, photo: Photo) {
        let notifier = self.notifier.clone();
        let ticket = self.exports.submit(photo, move |result| {
            let _ = slint::invoke_from_event_loop(move || report_export(&result, &notifier));
        });

        if ticket.is_none() {
            debug!("Save ignored while the same photo is still being exported");
        }
    }
}
