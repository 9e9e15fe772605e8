use super::TemplateStore;
use crate::error::{JournoError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `content` to `directory/filename` unless an entry with that name is
/// already listed in `directory`.
///
/// Returns `Ok(false)` without touching the filesystem when the name is taken.
/// Any I/O failure (missing or unwritable directory) is returned as an error.
pub fn write_file<P: AsRef<Path>>(filename: &str, content: &str, directory: P) -> Result<bool> {
    let directory = directory.as_ref();
    let existing = list_entries(directory)?;
    if existing.iter().any(|name| name == filename) {
        debug!(filename, dir = %directory.display(), "file already exists, not overwriting");
        return Ok(false);
    }

    let path = directory.join(filename);
    debug!(path = %path.display(), bytes = content.len(), "writing template");
    fs::write(&path, content).map_err(JournoError::Io)?;
    Ok(true)
}

fn list_entries(directory: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(directory).map_err(JournoError::Io)? {
        let entry = entry.map_err(JournoError::Io)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl TemplateStore for FileStore {
    fn write_file(&mut self, filename: &str, content: &str) -> Result<bool> {
        write_file(filename, content, &self.root)
    }

    fn list_files(&self) -> Result<Vec<String>> {
        list_entries(&self.root)
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::headers::fixtures::CONTENT_FEB_16;

    const FEB_16: &str = "2016-02 (Feb).md";

    #[test]
    fn test_write_file_once() {
        let dir = tempfile::tempdir().unwrap();

        let created = write_file(FEB_16, CONTENT_FEB_16, dir.path()).unwrap();
        assert!(created);
        assert_eq!(list_entries(dir.path()).unwrap(), vec![FEB_16.to_string()]);
        assert_eq!(
            fs::read_to_string(dir.path().join(FEB_16)).unwrap(),
            CONTENT_FEB_16
        );

        let created_again = write_file(FEB_16, CONTENT_FEB_16, dir.path()).unwrap();
        assert!(!created_again);
        assert_eq!(list_entries(dir.path()).unwrap(), vec![FEB_16.to_string()]);
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FEB_16), "my notes").unwrap();

        assert!(!write_file(FEB_16, CONTENT_FEB_16, dir.path()).unwrap());
        assert_eq!(
            fs::read_to_string(dir.path().join(FEB_16)).unwrap(),
            "my notes"
        );
    }

    #[test]
    fn test_other_files_do_not_block_write() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2016-01 (Jan).md"), "").unwrap();

        assert!(write_file(FEB_16, CONTENT_FEB_16, dir.path()).unwrap());
        assert_eq!(list_entries(dir.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = write_file(FEB_16, CONTENT_FEB_16, &missing).unwrap_err();
        assert!(matches!(err, JournoError::Io(_)));
    }

    #[test]
    fn test_file_store_delegates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        assert!(store.write_file(FEB_16, "x").unwrap());
        assert!(!store.write_file(FEB_16, "y").unwrap());
        assert_eq!(store.list_files().unwrap(), vec![FEB_16.to_string()]);
        assert_eq!(store.location(), dir.path().display().to_string());
    }
}
