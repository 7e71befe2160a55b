use crate::domain::{AppError, AssetFile};

/// Write access for persisting generated asset files.
pub trait FileWriter {
    /// Persist one generated file under the asset-output root.
    fn persist(&self, file: &AssetFile) -> Result<(), AppError>;
}
