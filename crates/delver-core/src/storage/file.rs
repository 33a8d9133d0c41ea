use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::config::ExportConfig;
use crate::report::ReportFile;

use super::error::StorageError;

/// Directory that exported reports are downloaded into.
///
/// Exports are purely client-local: nothing is ever written server-side.
/// The directory is created on first save if it doesn't exist.
pub struct ExportDir {
    dir: PathBuf,
}

impl ExportDir {
    /// Creates an export target for the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates an export target from export configuration.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(&config.output_dir)
    }

    /// Ensures the export directory exists.
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if self.dir.exists() {
            if !self.dir.is_dir() {
                return Err(StorageError::NotADirectory(self.dir.clone()));
            }
            return Ok(());
        }
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(&self.dir, e))
    }

    /// Writes an exported report, returning the path it landed at.
    pub fn save(&self, file: &ReportFile) -> Result<PathBuf, StorageError> {
        self.ensure_dir()?;

        let path = self.dir.join(&file.filename);
        fs::write(&path, &file.content).map_err(|e| StorageError::io(&path, e))?;

        debug!(path = %path.display(), mime = file.mime_type, "report exported");

        Ok(path)
    }
}
