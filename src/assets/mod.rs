//! Asset units composing the generated manifest tree.

mod install_config;

pub use install_config::{CONFIG_PATH, InstallConfig, render_install_config};
