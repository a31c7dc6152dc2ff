//! Shared pictures storage behind a narrow interface.

use super::record::ExportRecord;
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Storage that allocates new gallery entries.
pub trait MediaStore: Send + Sync {
    /// Allocates a writable entry for `record`.
    ///
    /// `Ok(None)` means the store declined to provide a target.
    fn insert(&self, record: &ExportRecord) -> io::Result<Option<Box<dyn MediaEntry>>>;
}

/// A pending entry. Nothing becomes visible until [`MediaEntry::publish`] succeeds.
pub trait MediaEntry: Send {
    fn open_output_stream(&mut self) -> io::Result<Box<dyn Write + '_>>;

    /// Makes the written content visible and returns its location.
    fn publish(self: Box<Self>) -> io::Result<PathBuf>;
}

/// Media store writing into a pictures directory on the local filesystem.
pub struct FsMediaStore {
    pictures_dir: Option<PathBuf>,
}

impl FsMediaStore {
    pub fn new(pictures_dir: Option<PathBuf>) -> Self {
        Self { pictures_dir }
    }
}

fn declined_on_permission(err: io::Error) -> io::Result<Option<Box<dyn MediaEntry>>> {
    if err.kind() == ErrorKind::PermissionDenied {
        warn!("Media store declined entry: {}", err);
        Ok(None)
    } else {
        Err(err)
    }
}

impl MediaStore for FsMediaStore {
    fn insert(&self, record: &ExportRecord) -> io::Result<Option<Box<dyn MediaEntry>>> {
        let Some(pictures_dir) = &self.pictures_dir else {
            warn!("No pictures directory available");
            return Ok(None);
        };

        let dir = pictures_dir.join(&record.relative_dir);
        if let Err(e) = fs::create_dir_all(&dir) {
            return declined_on_permission(e);
        }

        let final_path = dir.join(&record.display_name);
        if final_path.exists() {
            return Err(io::Error::new(
                ErrorKind::AlreadyExists,
                format!("{} already exists", final_path.display()),
            ));
        }

        let part_path = dir.join(format!(".{}.part", record.display_name));
        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&part_path)
        {
            Ok(file) => file,
            Err(e) => return declined_on_permission(e),
        };

        debug!("Allocated entry {} ({})", final_path.display(), record.mime_type);
        Ok(Some(Box::new(FsEntry {
            file: Some(file),
            part_path,
            final_path,
            published: false,
        })))
    }
}

/// Entry written to a hidden partial file and moved into place on publish.
struct FsEntry {
    file: Option<File>,
    part_path: PathBuf,
    final_path: PathBuf,
    published: bool,
}

impl MediaEntry for FsEntry {
    fn open_output_stream(&mut self) -> io::Result<Box<dyn Write + '_>> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::other("entry already closed"))?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn publish(mut self: Box<Self>) -> io::Result<PathBuf> {
        if let Some(file) = self.file.take() {
            file.sync_all()?;
        }
        publish_no_clobber(&self.part_path, &self.final_path)?;
        self.published = true;
        Ok(self.final_path.clone())
    }
}

/// Moves `part` to `target`, failing with `AlreadyExists` instead of replacing it.
fn publish_no_clobber(part: &Path, target: &Path) -> io::Result<()> {
    match fs::hard_link(part, target) {
        Ok(()) => {
            if let Err(e) = fs::remove_file(part) {
                warn!("Failed to remove {}: {}", part.display(), e);
            }
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(e),
        Err(e) => {
            // Filesystems without hard links fall back to a checked rename.
            debug!("Hard link unavailable ({}), renaming instead", e);
            if target.exists() {
                return Err(io::Error::new(
                    ErrorKind::AlreadyExists,
                    format!("{} already exists", target.display()),
                ));
            }
            fs::rename(part, target)
        }
    }
}

impl Drop for FsEntry {
    fn drop(&mut self) {
        if !self.published {
            self.file.take();
            if let Err(e) = fs::remove_file(&self.part_path) {
                if e.kind() != ErrorKind::NotFound {
                    warn!("Failed to remove {}: {}", self.part_path.display(), e);
                }
            }
        }
    }
}
