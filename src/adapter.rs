//! List adapter binding the photo sequence to recyclable rows.
//!
//! The toolkit owns virtualization: it asks for the item count, creates rows
//! when it has no spare one, and rebinds rows as positions scroll into view.

use crate::error::AdapterError;
use crate::photo::Photo;
use log::warn;
use std::rc::Rc;

/// Handler invoked when a control inside a row is tapped.
pub type TapHandler = Rc<dyn Fn()>;

/// What a bound row does when its controls are tapped.
pub trait RowActions {
    /// Image area tapped.
    fn open_full_screen(&self, photo: Photo);
    /// Save button tapped.
    fn save_to_gallery(&self, photo: Photo);
}

/// Receives the full re-render signal after the sequence changes.
pub trait RenderSignal {
    fn data_set_changed(&self);
}

impl<F: Fn()> RenderSignal for F {
    fn data_set_changed(&self) {
        self()
    }
}

/// Capabilities the toolkit's virtualized list needs from an adapter.
pub trait RowBinder {
    type Row;

    fn item_count(&self) -> usize;

    fn create_row(&self) -> Self::Row;

    fn bind_row(&self, row: &mut Self::Row, position: i64) -> Result<(), AdapterError>;
}

/// Transient state of one visible row: the displayed image and its two handlers.
#[derive(Default)]
pub struct PhotoRow {
    image: Option<Photo>,
    on_image_tap: Option<TapHandler>,
    on_save_tap: Option<TapHandler>,
}

impl PhotoRow {
    /// The photo currently shown, if the row has been bound.
    pub fn image(&self) -> Option<&Photo> {
        self.image.as_ref()
    }

    pub fn image_tap_handler(&self) -> Option<TapHandler> {
        self.on_image_tap.clone()
    }

    pub fn save_tap_handler(&self) -> Option<TapHandler> {
        self.on_save_tap.clone()
    }
}

/// Adapter owning the displayed photo sequence.
///
/// The parent screen never mutates the sequence directly; it goes through
/// [`PhotoAdapter::set_images`] and [`PhotoAdapter::clear_images`], each of
/// which emits exactly one re-render signal.
pub struct PhotoAdapter {
    photos: Vec<Photo>,
    actions: Rc<dyn RowActions>,
    signal: Box<dyn RenderSignal>,
}

impl PhotoAdapter {
    pub fn new(actions: Rc<dyn RowActions>, signal: impl RenderSignal + 'static) -> Self {
        Self {
            photos: Vec::new(),
            actions,
            signal: Box::new(signal),
        }
    }

    /// Replaces the whole sequence.
    pub fn set_images(&mut self, photos: impl IntoIterator<Item = Photo>) {
        self.photos.clear();
        self.photos.extend(photos);
        self.signal.data_set_changed();
    }

    /// Empties the sequence.
    pub fn clear_images(&mut self) {
        self.photos.clear();
        self.signal.data_set_changed();
    }

    fn checked_position(&self, position: i64) -> Result<usize, AdapterError> {
        usize::try_from(position)
            .ok()
            .filter(|index| *index < self.photos.len())
            .ok_or(AdapterError::IndexOutOfRange {
                position,
                len: self.photos.len(),
            })
    }
}

impl RowBinder for PhotoAdapter {
    type Row = PhotoRow;

    fn item_count(&self) -> usize {
        self.photos.len()
    }

    fn create_row(&self) -> PhotoRow {
        PhotoRow::default()
    }

    fn bind_row(&self, row: &mut PhotoRow, position: i64) -> Result<(), AdapterError> {
        let index = self.checked_position(position).inspect_err(|e| warn!("{}", e))?;
        let photo = self.photos[index].clone();

        // Overwrite both handlers so a recycled row never fires for its old position.
        row.on_image_tap = Some({
            let actions = self.actions.clone();
            let photo = photo.clone();
            Rc::new(move || actions.open_full_screen(photo.clone()))
        });
        row.on_save_tap = Some({
            let actions = self.actions.clone();
            let photo = photo.clone();
            Rc::new(move || actions.save_to_gallery(photo.clone()))
        });
        row.image = Some(photo);

        Ok(())
    }
}
