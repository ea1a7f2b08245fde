use std::{
    env, fs,
    path::{Component, Path, PathBuf},
};

use tracing::debug;

use crate::error::{Error, Res};

/// Lexically normalize a path. `.` components are removed and `..` folds
/// into the preceding component. A `..` directly below the root is dropped,
/// leading `..` of a relative path are kept. The filesystem is not touched,
/// so the path does not need to exist.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }

    out
}

/// Returns the directory `levels` steps above `path`.
pub fn compute_ancestor(path: &Path, levels: usize) -> Res<PathBuf> {
    let mut current = path;
    for _ in 0..levels {
        current = current
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| Error::Path {
                path: path.to_path_buf(),
                levels,
            })?;
    }

    Ok(current.to_path_buf())
}

/// Directory containing `entry`. A relative entry is resolved against `cwd`.
/// Symlinks are followed when the entry exists on disk, otherwise the path
/// is only normalized.
pub fn entry_directory(entry: &Path, cwd: &Path) -> Res<PathBuf> {
    let absolute = if entry.is_absolute() {
        entry.to_path_buf()
    } else {
        cwd.join(entry)
    };

    let resolved = fs::canonicalize(&absolute).unwrap_or_else(|_| normalize(&absolute));
    resolved.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::Resolution(format!("'{}' has no parent directory", resolved.display()))
    })
}

/// Absolute, normalized directory of the running executable. Independent of
/// the caller's working directory.
pub fn resolve_self_directory() -> Res<PathBuf> {
    let exe = env::current_exe().map_err(|err| Error::Resolution(err.to_string()))?;
    debug!("Executable: {}", exe.display());

    let cwd = if exe.is_absolute() {
        PathBuf::new()
    } else {
        env::current_dir().map_err(|err| Error::Resolution(err.to_string()))?
    };

    entry_directory(&exe, &cwd)
}
