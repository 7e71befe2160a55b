use std::sync::OnceLock;

static RAW: OnceLock<String> = OnceLock::new();

/// Set the build version recorded inside generated manifests.
///
/// Intended to be called once at startup by the surrounding system; later
/// calls are ignored.
pub fn init(raw: impl Into<String>) {
    let _ = RAW.set(raw.into());
}

/// The build version recorded inside generated manifests.
///
/// Falls back to the crate version when `init` was never called.
pub fn raw() -> &'static str {
    RAW.get_or_init(|| env!("CARGO_PKG_VERSION").to_string())
}
