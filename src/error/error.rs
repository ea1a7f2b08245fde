use std::path::PathBuf;

use thiserror::Error;

use crate::bootstrap::Step;

pub type Res<T> = Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The location of the entry point could not be determined.
    #[error("cannot locate entry point: {0}")]
    Resolution(String),

    /// Ascending from a directory ran out of ancestors.
    #[error("'{}' has fewer than {levels} parent directories", path.display())]
    Path { path: PathBuf, levels: usize },

    /// The environment-management facility is missing or refused the environment.
    #[error("{0}")]
    Activation(String),

    #[error("{}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    /// The bootstrap step this error terminated.
    pub fn step(&self) -> Step {
        match self {
            Error::Resolution(_) => Step::Resolve,
            Error::Config { .. } => Step::Configure,
            Error::Path { .. } => Step::ComputeRoot,
            Error::Activation(_) => Step::Activate,
        }
    }
}
