//! Shared library for `Markify`
//! Contains the marks engine and the configuration used by the CLI

pub mod core;
pub mod logger;

pub use self::core::{config, get_version};
