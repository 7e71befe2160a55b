mod adapters;
mod filesystem_store;

pub use adapters::MemoryAssetStore;
pub use filesystem_store::FilesystemAssetStore;
