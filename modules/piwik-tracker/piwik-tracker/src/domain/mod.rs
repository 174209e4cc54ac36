//! Domain layer of the piwik tracker plugin.

pub mod error;
pub mod fields;
pub mod resolver;
pub mod script;

pub use error::CoercionError;
pub use resolver::resolve;
pub use script::{DISABLED_PLACEHOLDER, generate};

#[cfg(test)]
mod script_test;
