use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, AssetFile};
use crate::ports::{FileFetcher, FileWriter};

/// Filesystem-backed asset store rooted at an output directory.
#[derive(Debug, Clone)]
pub struct FilesystemAssetStore {
    root: PathBuf,
}

impl FilesystemAssetStore {
    /// Create a store for the given asset-output root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Asset-output root this store reads from and writes to.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileFetcher for FilesystemAssetStore {
    fn fetch_by_name(&self, path: &Path) -> Result<Option<AssetFile>, AppError> {
        match fs::read(self.root.join(path)) {
            Ok(data) => Ok(Some(AssetFile::new(path, data))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl FileWriter for FilesystemAssetStore {
    fn persist(&self, file: &AssetFile) -> Result<(), AppError> {
        let path = self.root.join(&file.filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &file.data)?;
        Ok(())
    }
}
