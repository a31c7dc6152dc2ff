//! Slint model exposing the photo adapter to the virtualized `ListView`.
//!
//! Slint asks for `row_data` only for rows in view. Each visible position maps to
//! a bound `PhotoRow` kept in an LRU pool; when the pool is full the least recently
//! used row is recycled for the new position and rebound.

use crate::PhotoTile;
use crate::adapter::{PhotoAdapter, PhotoRow, RowActions, RowBinder, TapHandler};
use crate::config::ROW_POOL_CAPACITY;
use crate::image_loader::create_slint_image;
use crate::photo::Photo;
use log::{debug, warn};
use lru::LruCache;
use slint::{Model, ModelNotify, ModelTracker};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::num::NonZeroUsize;
use std::rc::Rc;

struct BoundRow {
    row: PhotoRow,
    /// Last photo converted for display, with its Slint image.
    rendered: Option<(Photo, slint::Image)>,
}

impl BoundRow {
    fn new(row: PhotoRow) -> Self {
        Self {
            row,
            rendered: None,
        }
    }

    fn tile(&mut self) -> Option<PhotoTile> {
        let photo = self.row.image()?.clone();
        let image = match &self.rendered {
            Some((rendered, image)) if rendered.ptr_eq(&photo) => image.clone(),
            _ => {
                let image = create_slint_image(&photo);
                self.rendered = Some((photo.clone(), image.clone()));
                image
            }
        };

        Some(PhotoTile {
            image,
            width: photo.width() as i32,
            height: photo.height() as i32,
        })
    }
}

pub struct PhotoGridModel {
    adapter: RefCell<PhotoAdapter>,
    rows: RefCell<LruCache<usize, BoundRow>>,
    reset_requested: Rc<Cell<bool>>,
    /// Bumped by every background load and every clear; older loads are stale.
    load_generation: Cell<u64>,
    notify: ModelNotify,
}

impl PhotoGridModel {
    pub fn new(actions: Rc<dyn RowActions>) -> Rc<Self> {
        let reset_requested = Rc::new(Cell::new(false));
        let signal = {
            let reset_requested = reset_requested.clone();
            move || reset_requested.set(true)
        };
        let capacity = NonZeroUsize::new(ROW_POOL_CAPACITY).unwrap_or(NonZeroUsize::MIN);

        Rc::new(Self {
            adapter: RefCell::new(PhotoAdapter::new(actions, signal)),
            rows: RefCell::new(LruCache::new(capacity)),
            reset_requested,
            load_generation: Cell::new(0),
            notify: ModelNotify::default(),
        })
    }

    /// Replaces the displayed photos.
    pub fn set_images(&self, photos: Vec<Photo>) {
        self.adapter.borrow_mut().set_images(photos);
        self.flush_reset();
    }

    /// Removes every photo. Loads still running will not repopulate the list.
    pub fn clear_images(&self) {
        self.load_generation.set(self.load_generation.get() + 1);
        self.adapter.borrow_mut().clear_images();
        self.flush_reset();
    }

    /// Starts a new background load, superseding earlier ones.
    pub fn begin_load(&self) -> u64 {
        let generation = self.load_generation.get() + 1;
        self.load_generation.set(generation);
        generation
    }

    pub fn is_current_load(&self, generation: u64) -> bool {
        self.load_generation.get() == generation
    }

    /// Shows the photos of load `generation` unless a later load or a clear
    /// happened since. Returns false when the result was dropped.
    pub fn apply_load(&self, generation: u64, photos: Vec<Photo>) -> bool {
        if !self.is_current_load(generation) {
            debug!(
                "Dropping stale load #{} (current #{})",
                generation,
                self.load_generation.get()
            );
            return false;
        }
        self.set_images(photos);
        true
    }

    pub fn photo_count(&self) -> usize {
        self.adapter.borrow().item_count()
    }

    // Forwarded after the adapter borrow is released so Slint may query the model.
    fn flush_reset(&self) {
        if self.reset_requested.replace(false) {
            self.rows.borrow_mut().clear();
            self.notify.reset();
        }
    }

    /// Fires the image handler of the row at `row`.
    pub fn tap_image(&self, row: usize) {
        match self.row_handler(row, PhotoRow::image_tap_handler) {
            Some(handler) => handler(),
            None => warn!("Image tap on unbound row {}", row),
        }
    }

    /// Fires the save handler of the row at `row`.
    pub fn tap_save(&self, row: usize) {
        match self.row_handler(row, PhotoRow::save_tap_handler) {
            Some(handler) => handler(),
            None => warn!("Save tap on unbound row {}", row),
        }
    }

    /// Looks up a handler of the row at `row`, binding it again if its slot
    /// was recycled. The pool borrow ends before the handler runs.
    fn row_handler(
        &self,
        row: usize,
        handler: impl Fn(&PhotoRow) -> Option<TapHandler>,
    ) -> Option<TapHandler> {
        let mut rows = self.rows.borrow_mut();
        if let Some(slot) = rows.get(&row) {
            return handler(&slot.row);
        }

        debug!("Rebinding row {} for a tap", row);
        let position = i64::try_from(row).ok()?;
        let mut slot = self.take_slot(&mut rows, row);
        self.adapter
            .borrow()
            .bind_row(&mut slot.row, position)
            .ok()?;
        let found = handler(&slot.row);
        rows.put(row, slot);
        found
    }

    fn take_slot(&self, rows: &mut LruCache<usize, BoundRow>, row: usize) -> BoundRow {
        if let Some(slot) = rows.pop(&row) {
            return slot;
        }
        if rows.len() >= rows.cap().get() {
            if let Some((old_row, slot)) = rows.pop_lru() {
                debug!("Recycling row {} for position {}", old_row, row);
                return slot;
            }
        }
        BoundRow::new(self.adapter.borrow().create_row())
    }
}

impl Model for PhotoGridModel {
    type Data = PhotoTile;

    fn row_count(&self) -> usize {
        self.adapter.borrow().item_count()
    }

    fn row_data(&self, row: usize) -> Option<PhotoTile> {
        let position = i64::try_from(row).ok()?;
        let mut rows = self.rows.borrow_mut();
        let mut slot = self.take_slot(&mut rows, row);

        if self
            .adapter
            .borrow()
            .bind_row(&mut slot.row, position)
            .is_err()
        {
            return None;
        }

        let tile = slot.tile();
        rows.put(row, slot);
        tile
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        &self.notify
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::solid_photo;

    #[derive(Default)]
    struct CountingActions {
        opened: RefCell<Vec<Photo>>,
        saved: RefCell<Vec<Photo>>,
    }

    impl RowActions for CountingActions {
        fn open_full_screen(&self, photo: Photo) {
            self.opened.borrow_mut().push(photo);
        }

        fn save_to_gallery(&self, photo: Photo) {
            self.saved.borrow_mut().push(photo);
        }
    }

    fn photos(count: u32) -> Vec<Photo> {
        (1..=count).map(|i| solid_photo(i, i + 1, [0, 0, 0])).collect()
    }

    #[test]
    fn row_data_follows_sequence() {
        let model = PhotoGridModel::new(Rc::new(CountingActions::default()));
        model.set_images(photos(3));

        assert_eq!(model.row_count(), 3);
        let tile = model.row_data(2).expect("tile");
        assert_eq!((tile.width, tile.height), (3, 4));
        assert!(model.row_data(3).is_none());
    }

    #[test]
    fn clear_empties_model() {
        let model = PhotoGridModel::new(Rc::new(CountingActions::default()));
        model.set_images(photos(2));
        model.row_data(0);

        model.clear_images();
        model.clear_images();

        assert_eq!(model.row_count(), 0);
        assert_eq!(model.photo_count(), 0);
        assert!(model.row_data(0).is_none());
    }

    #[test]
    fn taps_dispatch_to_bound_rows() {
        let actions = Rc::new(CountingActions::default());
        let model = PhotoGridModel::new(actions.clone());
        let sequence = photos(2);
        model.set_images(sequence.clone());

        model.row_data(1);
        model.tap_image(1);
        model.tap_save(1);
        model.tap_save(2);

        assert_eq!(actions.opened.borrow().len(), 1);
        assert!(actions.opened.borrow()[0].ptr_eq(&sequence[1]));
        assert_eq!(actions.saved.borrow().len(), 1);
    }

    #[test]
    fn tap_on_a_row_never_bound_binds_it() {
        let actions = Rc::new(CountingActions::default());
        let model = PhotoGridModel::new(actions.clone());
        let sequence = photos(2);
        model.set_images(sequence.clone());

        model.tap_save(0);

        assert_eq!(actions.saved.borrow().len(), 1);
        assert!(actions.saved.borrow()[0].ptr_eq(&sequence[0]));
    }

    #[test]
    fn recycled_rows_fire_for_their_new_position() {
        let actions = Rc::new(CountingActions::default());
        let model = PhotoGridModel::new(actions.clone());
        let count = (ROW_POOL_CAPACITY + 1) as u32;
        let sequence = photos(count);
        model.set_images(sequence.clone());

        for row in 0..=ROW_POOL_CAPACITY {
            model.row_data(row);
        }
        // Row 0 was recycled for the last position but is tapped while still on screen.
        model.tap_save(ROW_POOL_CAPACITY);
        model.tap_save(0);

        let saved = actions.saved.borrow();
        assert_eq!(saved.len(), 2);
        assert!(saved[0].ptr_eq(&sequence[ROW_POOL_CAPACITY]));
        assert!(saved[1].ptr_eq(&sequence[0]));
    }

    #[test]
    fn replacing_images_drops_stale_rows() {
        let actions = Rc::new(CountingActions::default());
        let model = PhotoGridModel::new(actions.clone());
        let old = photos(2);
        model.set_images(old.clone());
        model.row_data(0);

        let new = photos(1);
        model.set_images(new.clone());
        model.tap_image(0);

        let opened = actions.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].ptr_eq(&new[0]));
        assert!(!opened[0].ptr_eq(&old[0]));
    }

    #[test]
    fn later_load_wins_over_an_earlier_slower_one() {
        let model = PhotoGridModel::new(Rc::new(CountingActions::default()));
        let first = model.begin_load();
        let second = model.begin_load();

        assert!(model.apply_load(second, photos(2)));
        assert!(!model.apply_load(first, photos(5)));
        assert_eq!(model.row_count(), 2);
    }

    #[test]
    fn clear_discards_loads_still_running() {
        let model = PhotoGridModel::new(Rc::new(CountingActions::default()));
        let generation = model.begin_load();

        model.clear_images();

        assert!(!model.is_current_load(generation));
        assert!(!model.apply_load(generation, photos(3)));
        assert_eq!(model.row_count(), 0);
    }
}
