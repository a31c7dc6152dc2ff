use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns true when the path has one of the supported image extensions.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists supported image files directly inside `dir`, sorted by path.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    image_files.sort();
    Ok(image_files)
}

/// Expands command-line style inputs into image files.
///
/// Directories contribute their supported images; files are kept when supported.
pub fn collect_image_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(scan_directory(input)?);
        } else if input.is_file() && is_supported_image(input) {
            files.push(input.clone());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scan_keeps_supported_images_sorted() {
        let dir = TempDir::new().expect("tempdir");
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.webp"] {
            fs::write(dir.path().join(name), b"x").expect("write");
        }
        fs::create_dir(dir.path().join("nested.jpg")).expect("mkdir");

        let files = scan_directory(dir.path()).expect("scan");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.webp"]);
    }

    #[test]
    fn scan_of_missing_directory_fails() {
        let dir = TempDir::new().expect("tempdir");
        assert!(scan_directory(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn collect_mixes_directories_and_files() {
        let dir = TempDir::new().expect("tempdir");
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).expect("mkdir");
        fs::write(sub.join("one.jpg"), b"x").expect("write");
        let single = dir.path().join("two.png");
        fs::write(&single, b"x").expect("write");
        let ignored = dir.path().join("three.txt");
        fs::write(&ignored, b"x").expect("write");

        let files = collect_image_paths(&[sub.clone(), single.clone(), ignored]).expect("collect");

        assert_eq!(files, vec![sub.join("one.jpg"), single]);
    }
}
