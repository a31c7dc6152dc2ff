//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: async work that must stay on the main thread (file dialogs)
//! - `rayon::spawn`: CPU-heavy work (directory scans, decoding, JPEG export)
//! - `slint::invoke_from_event_loop`: returning results from rayon to the UI thread

pub mod actions;
pub mod handlers;
pub mod overlay;
pub mod photo_loading;
pub mod photo_model;
mod state_helpers;
pub mod toast;

pub use handlers::setup_handlers;
pub use state_helpers::*;
