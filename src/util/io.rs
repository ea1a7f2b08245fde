use std::{ffi::OsStr, path::Path, process::Command};

use tracing::info;

use crate::env::Exports;

/// Run a command with `envs` added to its environment and return its stdout.
/// A non-zero exit is an error carrying the command's stderr.
pub fn cmd(command: &Path, args: &[&OsStr], envs: &Exports) -> Result<String, String> {
    info!(
        "Cmd: {} {}",
        command.display(),
        args.iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let output = Command::new(command)
        .args(args)
        .envs(envs.iter())
        .output()
        .map_err(|err| format!("failed to run command '{}': {}", command.display(), err))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        return Err(format!(
            "command '{}' exited with a non-success code{}",
            command.display(),
            if stderr.is_empty() {
                "".to_string()
            } else {
                format!(": {}", stderr)
            }
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
