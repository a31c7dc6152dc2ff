//! State management for the photo viewer screen.

use crate::config::{self, EXPORT_THREADS};
use crate::export::{ExportQueue, FsMediaStore, GalleryExporter};
use crate::ui::actions::ScreenActions;
use crate::ui::overlay::SlintOverlay;
use crate::ui::photo_model::PhotoGridModel;
use crate::ui::toast::ToastNotifier;
use crate::viewer::FullScreenViewer;
use log::{info, warn};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Screen-wide state container.
///
/// Everything here lives on the UI thread; only the export queue hands work to
/// other threads.
pub struct AppState {
    /// Model behind the photo list; owns the displayed sequence.
    pub photos: Rc<PhotoGridModel>,
    /// Full-screen overlay controller.
    pub viewer: Rc<RefCell<FullScreenViewer<SlintOverlay>>>,
    /// Background export queue.
    pub exports: ExportQueue,
}

impl AppState {
    pub fn new(ui: &crate::AppWindow) -> Self {
        let pictures_dir = config::pictures_dir();
        info!("Saving exports under {:?}", pictures_dir);

        let exporter = GalleryExporter::new(Arc::new(FsMediaStore::new(pictures_dir)));
        let exports = match rayon::ThreadPoolBuilder::new()
            .num_threads(EXPORT_THREADS)
            .thread_name(|i| format!("export-{}", i))
            .build()
        {
            Ok(pool) => ExportQueue::with_pool(exporter, Arc::new(pool)),
            Err(e) => {
                warn!("Falling back to the global pool for exports: {}", e);
                ExportQueue::new(exporter)
            }
        };
        let viewer = Rc::new(RefCell::new(FullScreenViewer::new(SlintOverlay::new(
            ui.as_weak(),
        ))));
        let actions = Rc::new(ScreenActions::new(
            viewer.clone(),
            exports.clone(),
            ToastNotifier::new(ui.as_weak()),
        ));

        Self {
            photos: PhotoGridModel::new(actions),
            viewer,
            exports,
        }
    }
}
