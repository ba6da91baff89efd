//! Tests for cache invalidation.

use tempfile::TempDir;

use super::CacheFiles;

fn caches_in(dir: &TempDir) -> CacheFiles {
    CacheFiles::in_dir(dir.path())
}

fn touch(path: &std::path::Path) {
    std::fs::write(path, "cached").unwrap();
}

#[test]
fn removes_both_existing_files() {
    let dir = TempDir::new().unwrap();
    let caches = caches_in(&dir);
    touch(caches.manufacturer());
    touch(caches.public_name());

    let report = caches.clean();

    assert!(report.failed.is_empty());
    assert_eq!(report.removed.len(), 2);
    assert!(!caches.manufacturer().exists());
    assert!(!caches.public_name().exists());
}

#[test]
fn missing_files_are_not_errors() {
    let dir = TempDir::new().unwrap();
    let caches = caches_in(&dir);

    let report = caches.clean();

    assert!(report.failed.is_empty());
    assert!(report.removed.is_empty());
}

#[test]
fn missing_manufacturer_cache_does_not_block_public_name_cache() {
    let dir = TempDir::new().unwrap();
    let caches = caches_in(&dir);
    touch(caches.public_name());

    let report = caches.clean();

    assert!(report.failed.is_empty());
    assert_eq!(report.removed, vec![caches.public_name().to_path_buf()]);
    assert!(!caches.public_name().exists());
}

#[test]
fn failure_on_one_file_still_removes_the_other() {
    let dir = TempDir::new().unwrap();
    let caches = caches_in(&dir);
    // A directory cannot be removed with remove_file.
    std::fs::create_dir(caches.manufacturer()).unwrap();
    touch(caches.public_name());

    let report = caches.clean();

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].path, caches.manufacturer());
    assert!(!caches.public_name().exists());
}

#[test]
fn in_dir_uses_default_file_names() {
    let caches = CacheFiles::in_dir(std::path::Path::new("/state"));

    assert!(caches.manufacturer().ends_with(".manufacturer_cache"));
    assert!(caches.public_name().ends_with(".public_name_cache"));
}
