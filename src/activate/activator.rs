use std::path::Path;

use crate::{env::Exports, error::Res};

/// Result of a successful activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Shell code the caller evaluates to switch its environment.
    pub script: String,
}

/// Switches the active named environment to the one at a given directory.
pub trait EnvironmentActivator {
    /// `exports` holds the variables published so far; they must be visible
    /// to anything the activator launches.
    fn activate(&self, environment: &Path, exports: &Exports) -> Res<Activation>;
}
