use crate::error::{BadgeError, Result};
use std::path::{Path, PathBuf};

/// Directory every rendered badge is written into.
#[derive(Debug, Clone)]
pub struct OutputDir {
    path: PathBuf,
}

impl OutputDir {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory if it is absent. Existing directories are fine.
    pub fn ensure(&self) -> Result<()> {
        std::fs::create_dir_all(&self.path).map_err(|source| BadgeError::OutputWrite {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite `<dir>/<filename>` with `text`, returning the written path.
    pub fn write(&self, filename: &str, text: &str) -> Result<PathBuf> {
        self.ensure()?;
        let target = self.path.join(filename);
        std::fs::write(&target, text).map_err(|source| BadgeError::OutputWrite {
            path: target.clone(),
            source,
        })?;
        Ok(target)
    }
}
