//! Runs exports on worker threads with one-shot completion callbacks.
//!
//! Policy:
//! - a photo whose export is still in flight is not queued again,
//! - a ticket cancelled before its worker starts completes with `Cancelled`.

use super::exporter::{ExportOutcome, GalleryExporter};
use crate::error::ExportError;
use crate::photo::Photo;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

pub type ExportResult = Result<ExportOutcome, ExportError>;

/// Handle to a queued export.
#[derive(Clone)]
pub struct ExportTicket {
    cancelled: Arc<AtomicBool>,
}

impl ExportTicket {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Requests cancellation. Has no effect once the worker started writing.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

struct InFlight {
    photo: Photo,
    ticket: ExportTicket,
}

/// Queue dispatching exports to a rayon pool.
#[derive(Clone)]
pub struct ExportQueue {
    exporter: Arc<GalleryExporter>,
    in_flight: Arc<Mutex<Vec<InFlight>>>,
    /// Notified whenever a job leaves `in_flight`.
    idle: Arc<Condvar>,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl ExportQueue {
    /// Creates a queue running on the global rayon pool.
    pub fn new(exporter: GalleryExporter) -> Self {
        Self {
            exporter: Arc::new(exporter),
            in_flight: Arc::new(Mutex::new(Vec::new())),
            idle: Arc::new(Condvar::new()),
            pool: None,
        }
    }

    /// Creates a queue running on a dedicated pool.
    pub fn with_pool(exporter: GalleryExporter, pool: Arc<rayon::ThreadPool>) -> Self {
        Self {
            pool: Some(pool),
            ..Self::new(exporter)
        }
    }

    fn lock_in_flight(in_flight: &Mutex<Vec<InFlight>>) -> MutexGuard<'_, Vec<InFlight>> {
        in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queues an export of `photo`.
    ///
    /// `on_complete` runs exactly once on the worker thread. Returns `None`
    /// when the same photo is already being exported.
    pub fn submit<F>(&self, photo: Photo, on_complete: F) -> Option<ExportTicket>
    where
        F: FnOnce(ExportResult) + Send + 'static,
    {
        let ticket = ExportTicket::new();
        {
            let mut in_flight = Self::lock_in_flight(&self.in_flight);
            if in_flight.iter().any(|job| job.photo.ptr_eq(&photo)) {
                warn!("Export already in progress for this photo");
                return None;
            }
            in_flight.push(InFlight {
                photo: photo.clone(),
                ticket: ticket.clone(),
            });
        }

        let exporter = self.exporter.clone();
        let in_flight = self.in_flight.clone();
        let idle = self.idle.clone();
        let worker_ticket = ticket.clone();
        let job = move || {
            let result = if worker_ticket.is_cancelled() {
                debug!("Skipping cancelled export");
                Err(ExportError::Cancelled)
            } else {
                exporter.save(&photo)
            };

            Self::lock_in_flight(&in_flight).retain(|job| !job.photo.ptr_eq(&photo));
            idle.notify_all();
            on_complete(result);
        };
        match &self.pool {
            Some(pool) => pool.spawn(job),
            None => rayon::spawn(job),
        }

        Some(ticket)
    }

    /// Number of exports queued or running.
    pub fn pending(&self) -> usize {
        Self::lock_in_flight(&self.in_flight).len()
    }

    /// Cancels every export that has not started writing yet.
    pub fn cancel_pending(&self) {
        let in_flight = Self::lock_in_flight(&self.in_flight);
        if !in_flight.is_empty() {
            debug!("Cancelling {} pending export(s)", in_flight.len());
        }
        for job in in_flight.iter() {
            job.ticket.cancel();
        }
    }

    /// Blocks until no export is queued or running, or `timeout` elapses.
    ///
    /// Returns false when exports were still in flight at the deadline.
    pub fn wait_idle(&self, timeout: Duration) -> bool {
        let in_flight = Self::lock_in_flight(&self.in_flight);
        let (in_flight, _) = self
            .idle
            .wait_timeout_while(in_flight, timeout, |jobs| !jobs.is_empty())
            .unwrap_or_else(PoisonError::into_inner);
        in_flight.is_empty()
    }
}
