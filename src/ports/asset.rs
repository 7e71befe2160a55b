use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::domain::{AppError, AssetFile};
use crate::ports::FileFetcher;

/// A unit of generated output that an orchestrator can drive generically.
///
/// Implementers declare which other asset types they consume, then produce
/// their own content from the resolved set handed to `generate`. Assets are
/// held as trait objects so differently-shaped units compose into one
/// heterogeneous collection.
pub trait Asset: Any {
    /// Human-friendly label used in progress reporting.
    fn name(&self) -> &'static str;

    /// Asset types that must be generated before this one.
    fn dependencies(&self) -> Vec<TypeId> {
        Vec::new()
    }

    /// Produce this asset's content from its resolved dependencies.
    ///
    /// A unit whose content turns out to be unnecessary stays empty and
    /// still returns `Ok`.
    fn generate(&mut self, parents: &Parents) -> Result<(), AppError>;
}

/// An asset whose generated files are persisted under the asset-output root
/// and can be read back verbatim on a later run.
pub trait WritableAsset: Asset {
    /// Files produced by the last successful `generate` or `load`.
    fn files(&self) -> Vec<&AssetFile>;

    /// Reload previously persisted files instead of regenerating.
    ///
    /// Returns `Ok(false)` when the store holds no copy of this asset; the
    /// unit is left unchanged and that is not an error.
    fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool, AppError>;
}

/// Resolved dependency assets, keyed by concrete type.
#[derive(Default)]
pub struct Parents {
    assets: HashMap<TypeId, Box<dyn Any>>,
}

impl Parents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved asset so dependents can look it up by type.
    pub fn add<A: Asset>(&mut self, asset: A) {
        self.assets.insert(TypeId::of::<A>(), Box::new(asset));
    }

    /// Fetch a resolved dependency by its concrete type.
    pub fn get<A: Asset>(&self) -> Option<&A> {
        self.assets.get(&TypeId::of::<A>()).and_then(|asset| asset.downcast_ref::<A>())
    }
}
