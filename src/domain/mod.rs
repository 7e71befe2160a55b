mod asset_file;
mod config_map;
mod error;
pub mod version;

pub use asset_file::AssetFile;
pub use config_map::{ConfigMap, ObjectMeta};
pub use error::AppError;
