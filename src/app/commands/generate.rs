//! Generate-or-reuse the install ConfigMap under an asset-output root.

use std::path::PathBuf;

use serde::Serialize;

use crate::assets::InstallConfig;
use crate::domain::AppError;
use crate::ports::{Asset, FileFetcher, FileWriter, Parents, WritableAsset};

/// Options for a generate invocation.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Invoker recorded in the manifest, resolved by the caller from the
    /// environment or a flag.
    pub invoker_override: Option<String>,
    /// Regenerate even when a persisted copy exists.
    pub regenerate: bool,
}

/// Outcome of a generate invocation, suitable for machine-readable output.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// Paths written or reused, relative to the asset-output root.
    pub files: Vec<PathBuf>,
    /// True when a previously persisted manifest was reused verbatim.
    pub reused: bool,
    /// True when no invoker was resolved and the manifest was skipped.
    pub skipped: bool,
}

/// Generate the install ConfigMap, reusing a previously persisted copy
/// unless `regenerate` is set.
pub fn execute<S>(store: &S, options: GenerateOptions) -> Result<GenerateResult, AppError>
where
    S: FileFetcher + FileWriter,
{
    let mut asset = InstallConfig::new(options.invoker_override);

    if !options.regenerate && asset.load(store)? {
        let files = asset.files().iter().map(|file| file.filename.clone()).collect();
        return Ok(GenerateResult { files, reused: true, skipped: false });
    }

    asset.generate(&Parents::new())?;

    let mut files = Vec::new();
    for file in asset.files() {
        store.persist(file)?;
        files.push(file.filename.clone());
    }

    let skipped = files.is_empty();
    Ok(GenerateResult { files, reused: false, skipped })
}
