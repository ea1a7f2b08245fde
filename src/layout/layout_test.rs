use std::{fs, path::Path};

use crate::{
    error::Error,
    layout::{ENVIRONMENT_OFFSET, Layout, ROOT_LEVELS, compute_ancestor, entry_directory, normalize},
};

fn layout(script: &str, levels: usize) -> Layout {
    Layout::compute(script.into(), levels, Path::new(ENVIRONMENT_OFFSET))
        .unwrap_or_else(|err| panic!("unexpected error: {}", err))
}

#[test]
fn test_normalize() {
    let cases = [
        ("/opt/proj/../.conda/iDDS", "/opt/.conda/iDDS"),
        ("/opt/./proj/tools/..", "/opt/proj"),
        ("/..", "/"),
        ("/../../a", "/a"),
        ("a/../..", ".."),
        ("./a/b/../c", "a/c"),
        ("", "."),
        ("a/..", "."),
    ];

    for (input, expected) in cases {
        assert_eq!(normalize(Path::new(input)), Path::new(expected), "{}", input);
    }
}

#[test]
fn test_compute_ancestor() {
    let path = Path::new("/opt/proj/tools/env");
    assert_eq!(compute_ancestor(path, 0).unwrap(), path);
    assert_eq!(compute_ancestor(path, 1).unwrap(), Path::new("/opt/proj/tools"));
    assert_eq!(compute_ancestor(path, 2).unwrap(), Path::new("/opt/proj"));
    assert_eq!(compute_ancestor(path, 4).unwrap(), Path::new("/"));
}

#[test]
fn test_compute_ancestor_underflow() {
    match compute_ancestor(Path::new("/opt"), 2) {
        Err(Error::Path { path, levels }) => {
            assert_eq!(path, Path::new("/opt"));
            assert_eq!(levels, 2);
        }
        other => panic!("expected path error, got {:?}", other),
    }

    assert!(compute_ancestor(Path::new("/"), 1).is_err());
    assert!(compute_ancestor(Path::new("tools"), 1).is_err());
}

#[test]
fn test_layout_default_depth() {
    let layout = layout("/opt/proj/tools/env", ROOT_LEVELS);
    assert_eq!(layout.script(), Path::new("/opt/proj/tools/env"));
    assert_eq!(layout.tools(), Path::new("/opt/proj/tools"));
    assert_eq!(layout.root(), Path::new("/opt/proj"));
    assert_eq!(layout.environment(), Path::new("/opt/.conda/iDDS"));
}

#[test]
fn test_layout_single_level() {
    // Entry point at /opt/proj/tools/script
    let layout = layout("/opt/proj/tools", 1);
    assert_eq!(layout.tools(), Path::new("/opt/proj/tools"));
    assert_eq!(layout.root(), Path::new("/opt/proj"));
    assert_eq!(layout.environment(), Path::new("/opt/.conda/iDDS"));
}

#[test]
fn test_layout_entry_at_filesystem_root() {
    let script = entry_directory(Path::new("/script"), Path::new("/tmp")).unwrap();
    assert_eq!(script, Path::new("/"));

    let err = Layout::compute(script, ROOT_LEVELS, Path::new(ENVIRONMENT_OFFSET)).unwrap_err();
    assert!(matches!(err, Error::Path { levels: 2, .. }));
}

#[test]
fn test_entry_directory_ignores_cwd_for_absolute_entry() {
    let entry = Path::new("/opt/proj/tools/env/idds-env");
    let a = entry_directory(entry, Path::new("/tmp")).unwrap();
    let b = entry_directory(entry, Path::new("/var/lib")).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, Path::new("/opt/proj/tools/env"));
}

#[test]
fn test_entry_directory_relative_entry() {
    let entry = Path::new("./tools/env/../env/idds-env");
    let dir = entry_directory(entry, Path::new("/opt/proj")).unwrap();
    assert_eq!(dir, Path::new("/opt/proj/tools/env"));
}

#[cfg(unix)]
#[test]
fn test_entry_directory_follows_symlink() {
    let tmp = tempfile::tempdir().unwrap();
    let base = fs::canonicalize(tmp.path()).unwrap();

    let script_dir = base.join("proj/tools/env");
    fs::create_dir_all(&script_dir).unwrap();
    fs::write(script_dir.join("idds-env"), "").unwrap();

    let link = base.join("idds-env");
    std::os::unix::fs::symlink(script_dir.join("idds-env"), &link).unwrap();

    assert_eq!(entry_directory(&link, Path::new("/")).unwrap(), script_dir);

    let layout = Layout::compute(script_dir, ROOT_LEVELS, Path::new(ENVIRONMENT_OFFSET)).unwrap();
    assert_eq!(layout.root(), base.join("proj"));
    assert_eq!(layout.environment(), base.join(".conda/iDDS"));
}
