use std::{
    cell::RefCell,
    fmt::Display,
    path::{Path, PathBuf},
    sync::Once,
};

use tracing_subscriber::filter::LevelFilter;

use crate::{
    activate::{Activation, EnvironmentActivator},
    env::Exports,
    error::{Error, Res},
    util::init_logger,
};

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| init_logger(LevelFilter::OFF));
}

pub fn must<T, V: Display>(res: Result<T, V>) -> T {
    res.unwrap_or_else(|err| panic!("unexpected error: {}", err))
}

/// Activator recording every call instead of switching environments.
pub struct StubActivator {
    failure: Option<String>,
    calls: RefCell<Vec<(PathBuf, Exports)>>,
}

impl StubActivator {
    pub fn new() -> Self {
        Self {
            failure: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Activator that fails every call with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(PathBuf, Exports)> {
        self.calls.borrow().clone()
    }
}

impl EnvironmentActivator for StubActivator {
    fn activate(&self, environment: &Path, exports: &Exports) -> Res<Activation> {
        self.calls
            .borrow_mut()
            .push((environment.to_path_buf(), exports.clone()));

        match &self.failure {
            Some(message) => Err(Error::Activation(message.clone())),
            None => Ok(Activation {
                script: format!("# activated {}\n", environment.display()),
            }),
        }
    }
}
