use std::path::{Path, PathBuf};

use crate::{
    error::Res,
    layout::{compute_ancestor, normalize},
};

/// Number of directories between the entry point's directory and the project root.
pub const ROOT_LEVELS: usize = 2;

/// Location of the conda environment relative to the project root.
pub const ENVIRONMENT_OFFSET: &str = "../.conda/iDDS";

/// Variable the project root is published under.
pub const ROOT_VARIABLE: &str = "IDDS_HOME";

/// Layout holds the directories of an iDDS checkout. Everything is relative
/// to the directory of the entry point, which is assumed to live two levels
/// below the project root.
///
/// ```txt
/// :environment:/     # ../.conda/iDDS, relative to root
/// :root:/
///     tools/         # :tools:
///         env/       # :script:
///             idds-env
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    script: PathBuf,
    tools: PathBuf,
    root: PathBuf,
    environment: PathBuf,
}

impl Layout {
    /// Compute the layout from the entry point's directory. The root is
    /// `levels` directories up, the tools directory is the one just below it.
    pub fn compute(script: PathBuf, levels: usize, environment_offset: &Path) -> Res<Self> {
        let root = compute_ancestor(&script, levels)?;
        let tools = compute_ancestor(&script, levels.saturating_sub(1))?;
        let environment = normalize(&root.join(environment_offset));

        Ok(Self {
            script,
            tools,
            root,
            environment,
        })
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn tools(&self) -> &Path {
        &self.tools
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory handed to the activator.
    pub fn environment(&self) -> &Path {
        &self.environment
    }
}
