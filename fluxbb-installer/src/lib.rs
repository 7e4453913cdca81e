// Library exports for fluxbb-installer
// The setup binary drives everything through `Installer`

pub mod config_file;
pub mod db;
pub mod environment;
pub mod error;
pub mod installer;
pub mod seed;

pub use environment::InstallEnvironment;
pub use error::{InstallError, InstallResult};
pub use installer::{InstallPlan, InstallReport, Installer};
pub use seed::{DemoContent, SeedStrings};

/// Version written to `o_cur_version`
pub const FORUM_VERSION: &str = env!("CARGO_PKG_VERSION");
