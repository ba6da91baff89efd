//! Tests for version record persistence.

use tempfile::TempDir;

use crate::state::mock::MockVersionStore;
use crate::state::{
    FileVersionStore, LoadResult, VersionCheck, VersionStore, report_and_update,
};

mod load_result {
    use super::*;

    #[test]
    fn into_version_returns_loaded_string() {
        let result = LoadResult::Loaded("0.1.0".to_string());
        assert_eq!(result.into_version(), "0.1.0");
    }

    #[test]
    fn into_version_is_empty_for_not_found() {
        assert!(LoadResult::NotFound.into_version().is_empty());
    }

    #[test]
    fn into_version_is_empty_for_unreadable() {
        let result = LoadResult::Unreadable {
            reason: "test".to_string(),
        };
        assert!(result.into_version().is_empty());
    }
}

mod file_version_store {
    use super::*;

    #[test]
    fn load_returns_not_found_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = FileVersionStore::new(dir.path().join(".previous_version"));

        assert_eq!(store.load(), LoadResult::NotFound);
    }

    #[test]
    fn load_trims_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".previous_version");
        std::fs::write(&path, "0.0.9\n").unwrap();

        let store = FileVersionStore::new(&path);
        assert_eq!(store.load(), LoadResult::Loaded("0.0.9".to_string()));
    }

    #[test]
    fn load_returns_unreadable_for_directory() {
        let dir = TempDir::new().unwrap();
        let store = FileVersionStore::new(dir.path());

        match store.load() {
            LoadResult::Unreadable { reason } => {
                assert!(reason.contains("Failed to read file"));
            }
            other => panic!("Expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn save_then_load_returns_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".previous_version");
        let store = FileVersionStore::new(&path);

        store.save("1.2.3").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1.2.3\n");
        assert_eq!(store.load(), LoadResult::Loaded("1.2.3".to_string()));
    }

    #[test]
    fn save_overwrites_existing_record() {
        let dir = TempDir::new().unwrap();
        let store = FileVersionStore::new(dir.path().join(".previous_version"));

        store.save("1.0.0").unwrap();
        store.save("1.1.0").unwrap();

        assert_eq!(store.load(), LoadResult::Loaded("1.1.0".to_string()));
    }

    #[test]
    fn save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state").join(".previous_version");
        let store = FileVersionStore::new(&path);

        store.save("1.0.0").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".previous_version");
        let store = FileVersionStore::new(&path);

        store.save("1.0.0").unwrap();

        assert!(!dir.path().join(".previous_version.tmp").exists());
    }

    #[test]
    fn path_returns_configured_path() {
        let store = FileVersionStore::new("/tmp/.previous_version");
        assert_eq!(
            store.path(),
            std::path::Path::new("/tmp/.previous_version")
        );
    }
}

mod version_check {
    use super::*;

    #[test]
    fn same_version_is_unchanged_and_not_written() {
        let store = MockVersionStore::with_loaded("1.0.0");

        let check = report_and_update(&store, "1.0.0");

        assert_eq!(
            check,
            VersionCheck::Unchanged {
                version: "1.0.0".to_string()
            }
        );
        assert!(store.saved_versions().is_empty());
    }

    #[test]
    fn different_version_is_written_once() {
        let store = MockVersionStore::with_loaded("0.9.0");

        let check = report_and_update(&store, "1.0.0");

        assert_eq!(
            check,
            VersionCheck::Updated {
                from: "0.9.0".to_string(),
                to: "1.0.0".to_string()
            }
        );
        assert_eq!(store.saved_versions(), vec!["1.0.0".to_string()]);
    }

    #[test]
    fn first_run_reports_empty_previous_version() {
        let store = MockVersionStore::not_found();

        let check = report_and_update(&store, "1.0.0");

        assert_eq!(
            check,
            VersionCheck::Updated {
                from: String::new(),
                to: "1.0.0".to_string()
            }
        );
        assert_eq!(store.saved_versions(), vec!["1.0.0".to_string()]);
    }

    #[test]
    fn unreadable_record_is_treated_as_first_run() {
        let store = MockVersionStore::unreadable("permission denied");

        let check = report_and_update(&store, "1.0.0");

        assert!(matches!(check, VersionCheck::Updated { ref from, .. } if from.is_empty()));
        assert_eq!(store.saved_versions().len(), 1);
    }

    #[test]
    fn save_failure_is_not_fatal() {
        let store = MockVersionStore::with_loaded("0.9.0").failing_saves();

        let check = report_and_update(&store, "1.0.0");

        assert!(matches!(check, VersionCheck::Updated { .. }));
        assert_eq!(store.saved_versions(), vec!["1.0.0".to_string()]);
    }

    #[test]
    fn file_store_is_updated_then_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = FileVersionStore::new(dir.path().join(".previous_version"));

        let first = report_and_update(&store, "2.0.0");
        let second = report_and_update(&store, "2.0.0");

        assert!(matches!(first, VersionCheck::Updated { .. }));
        assert!(matches!(second, VersionCheck::Unchanged { .. }));
    }
}
