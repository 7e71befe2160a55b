use std::path::Path;

use crate::domain::{AppError, AssetFile};

/// Read access to previously persisted asset files.
pub trait FileFetcher {
    /// Fetch a persisted file by its path relative to the asset-output root.
    ///
    /// Returns `Ok(None)` when no such file exists; any other failure is an
    /// error.
    fn fetch_by_name(&self, path: &Path) -> Result<Option<AssetFile>, AppError>;
}
