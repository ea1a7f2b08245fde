use std::{
    env,
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    activate::{Activation, EnvironmentActivator},
    env::{Exports, Shell},
    error::{Error, Res},
    util::cmd,
};

/// Set by `conda init` in every shell where conda is usable.
pub const CONDA_EXE: &str = "CONDA_EXE";

/// Activates environments through `conda shell.<flavor> activate`, which
/// prints the activation script instead of changing any shell itself.
pub struct CondaActivator {
    executable: Option<PathBuf>,
    shell: Shell,
}

impl CondaActivator {
    pub fn new(executable: Option<PathBuf>, shell: Shell) -> Self {
        Self { executable, shell }
    }

    /// Use `configured` if given, otherwise the conda the current shell was
    /// initialized with.
    pub fn locate(configured: Option<PathBuf>, shell: Shell) -> Self {
        let executable = configured.or_else(|| {
            env::var_os(CONDA_EXE)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        });

        debug!("Conda executable: {:?}", executable);
        Self::new(executable, shell)
    }

    pub fn executable(&self) -> Option<&Path> {
        self.executable.as_deref()
    }

    /// Arguments passed to conda. The environment path is passed unchanged.
    pub fn arguments(&self, environment: &Path) -> [OsString; 3] {
        [
            self.shell.conda_plugin().into(),
            "activate".into(),
            environment.as_os_str().to_os_string(),
        ]
    }
}

impl EnvironmentActivator for CondaActivator {
    fn activate(&self, environment: &Path, exports: &Exports) -> Res<Activation> {
        let Some(conda) = &self.executable else {
            return Err(Error::Activation(format!(
                "conda is not initialized in this shell (${} is not set)",
                CONDA_EXE
            )));
        };

        info!("Activating {}", environment.display());
        let args = self.arguments(environment);
        let args: Vec<&OsStr> = args.iter().map(OsString::as_os_str).collect();

        let script = cmd(conda, &args, exports).map_err(Error::Activation)?;
        Ok(Activation { script })
    }
}
