pub mod cli;
pub mod config;
pub mod error;
pub mod k8s;
pub mod logging;
pub mod report;

pub use error::{ResolverError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "resolver";
