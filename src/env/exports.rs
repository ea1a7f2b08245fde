use std::ffi::{OsStr, OsString};

use tracing::debug;

use crate::env::Shell;

/// Variables published by the bootstrapper. Handed to every process the
/// activator launches and rendered into the script for the calling shell.
///
/// Values are kept as raw OS strings so child processes see the exact bytes.
/// Only the rendered script is lossy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exports {
    vars: Vec<(String, OsString)>,
}

impl Exports {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Set a variable, replacing any earlier value under the same name.
    pub fn set<V: Into<OsString>>(&mut self, name: &str, value: V) {
        let value = value.into();
        debug!("Export: {}={}", name, value.to_string_lossy());

        match self.vars.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value,
            None => self.vars.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.vars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_os_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OsStr)> {
        self.vars.iter().map(|(n, v)| (n.as_str(), v.as_os_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Render all variables as statements for the given shell, in insertion order.
    pub fn render(&self, shell: Shell) -> String {
        self.iter()
            .map(|(name, value)| shell.export(name, value))
            .collect()
    }
}
