use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Minimal rendering of a Kubernetes ConfigMap manifest.
///
/// Only the fields the installer artifact needs are modeled. The data
/// section is a `BTreeMap` so rendered keys come out in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMap {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub data: BTreeMap<String, String>,
}

/// Namespace/name identity of a manifest object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub namespace: String,
    pub name: String,
}

impl ConfigMap {
    /// Create an empty ConfigMap in the given namespace.
    pub fn new(namespace: &str, name: &str) -> Self {
        Self {
            api_version: "v1".to_string(),
            kind: "ConfigMap".to_string(),
            metadata: ObjectMeta { namespace: namespace.to_string(), name: name.to_string() },
            data: BTreeMap::new(),
        }
    }
}
