use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, AssetFile};
use crate::ports::{FileFetcher, FileWriter};

/// In-memory asset store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    // Arc<Mutex> so clones observe the same file set.
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file as if a previous run had persisted it.
    pub fn insert(&self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) {
        let mut files = self.files.lock().unwrap();
        files.insert(path.into(), data.into());
    }

    pub fn contains(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }
}

impl FileFetcher for MemoryAssetStore {
    fn fetch_by_name(&self, path: &Path) -> Result<Option<AssetFile>, AppError> {
        let files = self.files.lock().unwrap();
        Ok(files.get(path).map(|data| AssetFile::new(path, data.clone())))
    }
}

impl FileWriter for MemoryAssetStore {
    fn persist(&self, file: &AssetFile) -> Result<(), AppError> {
        let mut files = self.files.lock().unwrap();
        files.insert(file.filename.clone(), file.data.clone());
        Ok(())
    }
}
