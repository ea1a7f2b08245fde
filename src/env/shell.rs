use std::ffi::OsStr;

use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};

/// Shell flavor of the emitted activation script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Shell {
    #[default]
    Posix,
    Csh,
    Fish,
}

impl Shell {
    /// Statement setting `name` to `value` in the calling shell. Bytes that
    /// are not valid UTF-8 are replaced.
    pub fn export(&self, name: &str, value: &OsStr) -> String {
        let value = value.to_string_lossy();
        match self {
            Shell::Posix => format!("export {}={}\n", name, quote_single(&value)),
            Shell::Csh => format!("setenv {} {};\n", name, quote_single(&value)),
            Shell::Fish => format!("set -gx {} {};\n", name, quote_fish(&value)),
        }
    }

    /// Conda's activation plugin for this shell, as in `conda shell.posix activate`.
    pub fn conda_plugin(&self) -> String {
        format!("shell.{}", self)
    }
}

// Closes the quote, emits an escaped quote and reopens. Works for sh and csh.
fn quote_single(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn quote_fish(value: &str) -> String {
    format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'"))
}
