use std::path::{Path, PathBuf};

use super::*;

#[test]
fn memory_fs_reads_inserted_file() {
    let fs = MemoryFileSystem::new().with_file("proj/a.gd", "func a():");
    assert_eq!(fs.read(Path::new("proj/a.gd")).unwrap(), b"func a():");
    assert!(fs.exists(Path::new("proj/a.gd")));
}

#[test]
fn memory_fs_missing_file_is_not_found() {
    let fs = MemoryFileSystem::new();
    let err = fs.read(Path::new("nope.gd")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(!fs.exists(Path::new("nope.gd")));
}

#[test]
fn real_fs_reads_temp_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("Data.gd");
    std::fs::write(&path, "ice_basic").unwrap();

    let fs = RealFileSystem;
    assert!(fs.exists(&path));
    assert_eq!(fs.read(&path).unwrap(), b"ice_basic");
}

#[test]
fn resolve_joins_relative_paths() {
    let resolved = resolve(Path::new("/project"), Path::new("Scenes/main/Data.gd"));
    assert_eq!(resolved, PathBuf::from("/project/Scenes/main/Data.gd"));
}

#[test]
fn resolve_keeps_absolute_paths() {
    let absolute = std::env::temp_dir().join("Data.gd");
    assert_eq!(resolve(Path::new("project"), &absolute), absolute);
}

#[test]
fn display_root_falls_back_for_missing_dir() {
    let missing = Path::new("definitely/not/here");
    assert_eq!(display_root(missing), missing.to_path_buf());
}
