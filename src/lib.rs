//! instgen: generate and reload installer manifest assets for cluster
//! bring-up.
//!
//! The reusable core is a small asset abstraction: each asset declares its
//! dependencies, generates its files once, and can reconstruct itself from a
//! previously persisted tree instead of regenerating. The one asset shipped
//! here is the `openshift-install` ConfigMap, which records the tool that
//! invoked the installation and the build version that ran.

pub mod app;
pub mod assets;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::PathBuf;

use app::commands::generate;
use services::FilesystemAssetStore;

pub use app::commands::generate::{GenerateOptions, GenerateResult};
pub use domain::AppError;

/// Environment variable naming the tool that invoked the installation.
pub const INVOKER_ENV: &str = "OPENSHIFT_INSTALL_INVOKER";

/// Read the invoker override from the environment.
///
/// Absent and empty are equivalent. The variable is read once per
/// invocation and the resolved value is passed down as a plain parameter.
pub fn invoker_from_env() -> Option<String> {
    std::env::var(INVOKER_ENV).ok().filter(|value| !value.is_empty())
}

/// Generate the install ConfigMap under the current directory.
pub fn generate(options: GenerateOptions) -> Result<GenerateResult, AppError> {
    let store = FilesystemAssetStore::current()?;
    generate::execute(&store, options)
}

/// Generate the install ConfigMap under the given asset-output root.
pub fn generate_at(root: PathBuf, options: GenerateOptions) -> Result<GenerateResult, AppError> {
    let store = FilesystemAssetStore::new(root);
    generate::execute(&store, options)
}
