//! The `openshift-install` ConfigMap asset.
//!
//! Records which tool invoked the installation and which build version of
//! that tool ran, so a running cluster can report how it was created.

use std::path::Path;

use crate::domain::{AppError, AssetFile, ConfigMap, version};
use crate::ports::{Asset, FileFetcher, Parents, WritableAsset};

/// Relative path of the install ConfigMap within the asset-output root.
pub const CONFIG_PATH: &str = "openshift/openshift-install.yaml";

const CONFIG_MAP_NAMESPACE: &str = "openshift-config";
const CONFIG_MAP_NAME: &str = "openshift-install";

/// Generates the `openshift-install` ConfigMap manifest.
#[derive(Debug, Default)]
pub struct InstallConfig {
    invoker_override: Option<String>,
    file: Option<AssetFile>,
}

impl InstallConfig {
    /// Create the asset with an invoker override resolved by the caller,
    /// normally the value of `OPENSHIFT_INSTALL_INVOKER` read once at
    /// startup.
    pub fn new(invoker_override: Option<String>) -> Self {
        Self { invoker_override, file: None }
    }

    fn config_path() -> &'static Path {
        Path::new(CONFIG_PATH)
    }
}

impl Asset for InstallConfig {
    fn name(&self) -> &'static str {
        "OpenShift Install"
    }

    fn generate(&mut self, _parents: &Parents) -> Result<(), AppError> {
        let rendered =
            render_install_config(self.invoker_override.as_deref(), None, version::raw())?;

        if let Some(manifest) = rendered {
            self.file = Some(AssetFile::new(CONFIG_PATH, manifest.into_bytes()));
        }

        Ok(())
    }
}

impl WritableAsset for InstallConfig {
    fn files(&self) -> Vec<&AssetFile> {
        self.file.iter().collect()
    }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool, AppError> {
        match fetcher.fetch_by_name(Self::config_path())? {
            Some(file) => {
                self.file = Some(file);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Render the install ConfigMap manifest.
///
/// The invoker is the override when non-empty, else the default when
/// non-empty. When neither is set no manifest is needed and `Ok(None)` is
/// returned; that outcome is a skip, not an error.
pub fn render_install_config(
    invoker_override: Option<&str>,
    default_invoker: Option<&str>,
    build_version: &str,
) -> Result<Option<String>, AppError> {
    let Some(invoker) = resolve_invoker(invoker_override, default_invoker) else {
        return Ok(None);
    };

    let mut config_map = ConfigMap::new(CONFIG_MAP_NAMESPACE, CONFIG_MAP_NAME);
    config_map.data.insert("version".to_string(), build_version.to_string());
    config_map.data.insert("invoker".to_string(), invoker.to_string());

    let manifest = serde_yaml::to_string(&config_map).map_err(AppError::Serialize)?;
    Ok(Some(manifest))
}

/// Pick the invoker value: a non-empty override wins over a non-empty
/// default; empty and absent are equivalent.
fn resolve_invoker<'a>(
    invoker_override: Option<&'a str>,
    default_invoker: Option<&'a str>,
) -> Option<&'a str> {
    invoker_override
        .filter(|value| !value.is_empty())
        .or_else(|| default_invoker.filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::services::MemoryAssetStore;

    fn parse(manifest: &str) -> ConfigMap {
        serde_yaml::from_str(manifest).expect("manifest should be valid YAML")
    }

    #[test]
    fn rendered_manifest_carries_version_and_invoker() {
        let manifest = render_install_config(Some("my-tool"), Some(""), "v1.2.3")
            .unwrap()
            .expect("manifest should be rendered");

        assert!(manifest.contains("version: v1.2.3"));
        assert!(manifest.contains("invoker: my-tool"));

        let cm = parse(&manifest);
        assert_eq!(cm.api_version, "v1");
        assert_eq!(cm.kind, "ConfigMap");
        assert_eq!(cm.metadata.namespace, "openshift-config");
        assert_eq!(cm.metadata.name, "openshift-install");
    }

    #[test]
    fn default_invoker_applies_when_override_is_empty() {
        let manifest = render_install_config(Some(""), Some("installer-default"), "v1.2.3")
            .unwrap()
            .expect("manifest should be rendered");

        let cm = parse(&manifest);
        assert_eq!(cm.data.get("invoker"), Some(&"installer-default".to_string()));
    }

    #[test]
    fn no_invoker_means_no_manifest_and_no_error() {
        let rendered = render_install_config(Some(""), Some(""), "v1.2.3").unwrap();
        assert!(rendered.is_none());

        let rendered = render_install_config(None, None, "v1.2.3").unwrap();
        assert!(rendered.is_none());
    }

    #[test]
    fn generate_stores_file_at_fixed_path() {
        let mut asset = InstallConfig::new(Some("my-tool".to_string()));
        asset.generate(&Parents::new()).unwrap();

        let files = asset.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].filename, Path::new(CONFIG_PATH));

        let manifest = std::str::from_utf8(&files[0].data).unwrap();
        let cm = parse(manifest);
        assert_eq!(cm.data.get("invoker"), Some(&"my-tool".to_string()));
        assert_eq!(cm.data.get("version"), Some(&version::raw().to_string()));
    }

    #[test]
    fn generate_without_invoker_leaves_unit_empty() {
        let mut asset = InstallConfig::new(None);
        asset.generate(&Parents::new()).unwrap();
        assert!(asset.files().is_empty());
    }

    #[test]
    fn load_of_absent_file_reports_false() {
        let store = MemoryAssetStore::new();
        let mut asset = InstallConfig::default();

        let found = asset.load(&store).unwrap();
        assert!(!found);
        assert!(asset.files().is_empty());
    }

    #[test]
    fn load_stores_fetched_bytes_verbatim() {
        let store = MemoryAssetStore::new();
        store.insert(CONFIG_PATH, b"handwritten: manifest\n".to_vec());

        let mut asset = InstallConfig::default();
        let found = asset.load(&store).unwrap();

        assert!(found);
        assert_eq!(asset.files()[0].data, b"handwritten: manifest\n");
    }

    #[test]
    fn load_propagates_fetch_failures() {
        struct FailingFetcher;

        impl FileFetcher for FailingFetcher {
            fn fetch_by_name(&self, _path: &Path) -> Result<Option<AssetFile>, AppError> {
                Err(AppError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "store unavailable",
                )))
            }
        }

        let mut asset = InstallConfig::default();
        let result = asset.load(&FailingFetcher);

        assert!(result.is_err());
        assert!(asset.files().is_empty());
    }

    #[test]
    fn generate_then_load_roundtrips_exact_bytes() {
        use crate::ports::FileWriter;

        let store = MemoryAssetStore::new();

        let mut first = InstallConfig::new(Some("my-tool".to_string()));
        first.generate(&Parents::new()).unwrap();
        for file in first.files() {
            store.persist(file).unwrap();
        }

        let mut second = InstallConfig::default();
        assert!(second.load(&store).unwrap());
        assert_eq!(second.files(), first.files());
    }

    proptest! {
        #[test]
        fn override_always_wins_when_non_empty(
            override_value in "[a-z0-9-]{0,12}",
            default_value in "[a-z0-9-]{0,12}",
        ) {
            let resolved = resolve_invoker(Some(&override_value), Some(&default_value));
            if !override_value.is_empty() {
                prop_assert_eq!(resolved, Some(override_value.as_str()));
            } else if !default_value.is_empty() {
                prop_assert_eq!(resolved, Some(default_value.as_str()));
            } else {
                prop_assert_eq!(resolved, None);
            }
        }

        #[test]
        fn manifest_exists_exactly_when_an_invoker_resolves(
            override_value in "[a-z0-9-]{0,12}",
            default_value in "[a-z0-9-]{0,12}",
        ) {
            let rendered = render_install_config(
                Some(&override_value),
                Some(&default_value),
                "v0.0.1",
            ).unwrap();

            match resolve_invoker(Some(&override_value), Some(&default_value)) {
                Some(expected) => {
                    let manifest = rendered.expect("resolved invoker must produce a manifest");
                    let cm: ConfigMap = serde_yaml::from_str(&manifest).unwrap();
                    prop_assert_eq!(cm.data.get("invoker"), Some(&expected.to_string()));
                    prop_assert_eq!(cm.data.get("version"), Some(&"v0.0.1".to_string()));
                }
                None => prop_assert!(rendered.is_none()),
            }
        }
    }
}
