//! Transient toast notifications.

use crate::config::TOAST_DURATION;
use crate::export::{Notice, NoticeKind, Notifier};
use slint::{ComponentHandle, Timer, TimerMode};

thread_local! {
    // Restarted by every notice so the latest message gets the full duration.
    static TOAST_TIMER: Timer = Timer::default();
}

/// Shows notices at the bottom of the main window.
///
/// Holds only a weak window handle, so it can travel to worker threads and be
/// used again once back on the event loop.
#[derive(Clone)]
pub struct ToastNotifier {
    ui: slint::Weak<crate::AppWindow>,
}

impl ToastNotifier {
    pub fn new(ui: slint::Weak<crate::AppWindow>) -> Self {
        Self { ui }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let Some(ui) = self.ui.upgrade() else {
            return;
        };

        let state = ui.global::<crate::GalleryState>();
        state.set_toast_message(notice.message.into());
        state.set_toast_is_error(notice.kind == NoticeKind::Failure);
        state.set_toast_visible(true);

        let ui_handle = self.ui.clone();
        TOAST_TIMER.with(|timer| {
            timer.start(TimerMode::SingleShot, TOAST_DURATION, move || {
                if let Some(ui) = ui_handle.upgrade() {
                    ui.global::<crate::GalleryState>().set_toast_visible(false);
                }
            });
        });
    }
}
