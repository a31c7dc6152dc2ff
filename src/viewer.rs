//! Full-screen overlay for a single photo.

use crate::photo::Photo;
use log::debug;

/// Surface the overlay is drawn on.
pub trait OverlaySurface {
    /// Shows `photo` above the current screen, scaled to fit, without chrome.
    fn present(&self, photo: &Photo);
    /// Removes the overlay and gives focus back to the underlying screen.
    fn dismiss(&self);
}

/// Which layer currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Screen,
    Overlay,
}

struct Overlay {
    id: u64,
    photo: Photo,
}

/// Shows one photo at a time in a screen-filling overlay dismissed by tap.
pub struct FullScreenViewer<S: OverlaySurface> {
    surface: S,
    overlay: Option<Overlay>,
    next_id: u64,
}

impl<S: OverlaySurface> FullScreenViewer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            overlay: None,
            next_id: 1,
        }
    }

    /// Opens a fresh overlay for `photo`, replacing any open one.
    pub fn show(&mut self, photo: Photo) {
        let id = self.next_id;
        self.next_id += 1;
        debug!(
            "Opening full-screen overlay #{} ({}x{})",
            id,
            photo.width(),
            photo.height()
        );
        self.surface.present(&photo);
        self.overlay = Some(Overlay { id, photo });
    }

    /// Handles a tap on the overlay image. Returns true if an overlay was dismissed.
    pub fn tap(&mut self) -> bool {
        match self.overlay.take() {
            Some(overlay) => {
                debug!("Dismissing full-screen overlay #{}", overlay.id);
                self.surface.dismiss();
                true
            }
            None => false,
        }
    }

    pub fn focus(&self) -> Focus {
        if self.overlay.is_some() {
            Focus::Overlay
        } else {
            Focus::Screen
        }
    }

    pub fn current_photo(&self) -> Option<&Photo> {
        self.overlay.as_ref().map(|overlay| &overlay.photo)
    }

    /// Identifier of the open overlay instance.
    #[cfg(test)]
    fn overlay_id(&self) -> Option<u64> {
        self.overlay.as_ref().map(|overlay| overlay.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::solid_photo;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum SurfaceEvent {
        Present(u32, u32),
        Dismiss,
    }

    #[derive(Clone, Default)]
    struct RecordingSurface {
        events: Rc<RefCell<Vec<SurfaceEvent>>>,
    }

    impl OverlaySurface for RecordingSurface {
        fn present(&self, photo: &Photo) {
            self.events
                .borrow_mut()
                .push(SurfaceEvent::Present(photo.width(), photo.height()));
        }

        fn dismiss(&self) {
            self.events.borrow_mut().push(SurfaceEvent::Dismiss);
        }
    }

    #[test]
    fn show_then_tap_returns_focus_to_screen() {
        let surface = RecordingSurface::default();
        let mut viewer = FullScreenViewer::new(surface.clone());
        let photo = solid_photo(6, 4, [0, 0, 255]);

        viewer.show(photo.clone());
        assert_eq!(viewer.focus(), Focus::Overlay);
        assert!(viewer.current_photo().expect("open").ptr_eq(&photo));

        assert!(viewer.tap());
        assert_eq!(viewer.focus(), Focus::Screen);
        assert!(viewer.current_photo().is_none());
        assert!(viewer.overlay_id().is_none());
        assert_eq!(
            *surface.events.borrow(),
            vec![SurfaceEvent::Present(6, 4), SurfaceEvent::Dismiss]
        );
    }

    #[test]
    fn tap_without_overlay_does_nothing() {
        let surface = RecordingSurface::default();
        let mut viewer = FullScreenViewer::new(surface.clone());

        assert!(!viewer.tap());
        assert!(surface.events.borrow().is_empty());
    }

    #[test]
    fn each_show_creates_a_fresh_overlay() {
        let mut viewer = FullScreenViewer::new(RecordingSurface::default());

        viewer.show(solid_photo(1, 1, [0, 0, 0]));
        let first = viewer.overlay_id().expect("open");
        viewer.tap();
        viewer.show(solid_photo(1, 1, [0, 0, 0]));
        let second = viewer.overlay_id().expect("open");

        assert_ne!(first, second);
    }
}
