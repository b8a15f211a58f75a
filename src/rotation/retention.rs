//! Retention cleanup of expired log files

use crate::rotation::parse_file_name;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Delete managed log files older than the retention window.
///
/// Scans `folder` for names matching `<bucket>_<sequence>.log`, computes
/// each file's age in whole days from its last-modified time, and removes
/// those strictly older than `retention_days`. A failure to delete one file
/// is reported and the scan continues; a failure to enumerate the folder
/// aborts this pass only. Returns the number of files removed.
pub fn remove_expired(folder: &Path, retention_days: u32) -> usize {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!(
                "[LOGGER WARNING] Retention scan failed for '{}': {}",
                folder.display(),
                e
            );
            return 0;
        }
    };

    let now = SystemTime::now();
    let mut removed = 0;

    for entry in entries.filter_map(|entry| entry.ok()) {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if parse_file_name(name).is_none() {
            continue;
        }

        let path = entry.path();
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                eprintln!(
                    "[LOGGER WARNING] Cannot read modification time of '{}': {}",
                    path.display(),
                    e
                );
                continue;
            }
        };

        if !is_expired(modified, now, retention_days) {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => {
                eprintln!(
                    "[LOGGER WARNING] Failed to delete expired log file '{}': {}",
                    path.display(),
                    e
                );
            }
        }
    }

    removed
}

/// Whether a file last modified at `modified` has outlived the retention
/// window as of `now`. Age counts whole elapsed days; a file exactly at the
/// window survives.
pub fn is_expired(modified: SystemTime, now: SystemTime, retention_days: u32) -> bool {
    let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
    let age_days = age.as_secs() / SECONDS_PER_DAY;
    age_days > u64::from(retention_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn days(n: u64) -> Duration {
        Duration::from_secs(n * SECONDS_PER_DAY)
    }

    #[test]
    fn test_is_expired_beyond_window() {
        let now = SystemTime::now();
        assert!(is_expired(now - days(40), now, 30));
        assert!(is_expired(now - days(31), now, 30));
    }

    #[test]
    fn test_is_expired_within_window() {
        let now = SystemTime::now();
        assert!(!is_expired(now - days(29), now, 30));
        assert!(!is_expired(now, now, 30));
    }

    #[test]
    fn test_is_expired_exactly_at_window_survives() {
        let now = SystemTime::now();
        assert!(!is_expired(now - days(30), now, 30));
    }

    #[test]
    fn test_is_expired_partial_day_truncates() {
        let now = SystemTime::now();
        // 30 days and 23 hours is still 30 whole days.
        let modified = now - days(30) - Duration::from_secs(23 * 3600);
        assert!(!is_expired(modified, now, 30));
    }

    #[test]
    fn test_is_expired_future_mtime_is_fresh() {
        let now = SystemTime::now();
        assert!(!is_expired(now + days(1), now, 0));
    }

    #[test]
    fn test_scan_keeps_fresh_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("20250101_0.log"), "fresh\n").unwrap();
        fs::write(dir.path().join("20250101_1.log"), "fresh\n").unwrap();

        let removed = remove_expired(dir.path(), 30);

        assert_eq!(removed, 0);
        assert!(dir.path().join("20250101_0.log").exists());
        assert!(dir.path().join("20250101_1.log").exists());
    }

    fn backdate(path: &Path, age: Duration) {
        let file = fs::OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
    }

    #[test]
    fn test_scan_deletes_file_beyond_window() {
        let dir = tempdir().unwrap();
        let expired = dir.path().join("20250101_0.log");
        let fresh = dir.path().join("20250101_1.log");
        fs::write(&expired, "old\n").unwrap();
        fs::write(&fresh, "new\n").unwrap();
        backdate(&expired, days(40));

        let removed = remove_expired(dir.path(), 30);

        assert_eq!(removed, 1);
        assert!(!expired.exists());
        assert!(fresh.exists());
    }

    #[test]
    fn test_scan_never_deletes_old_foreign_files() {
        let dir = tempdir().unwrap();
        let foreign = dir.path().join("keep-me.txt");
        fs::write(&foreign, "old\n").unwrap();
        backdate(&foreign, days(40));

        assert_eq!(remove_expired(dir.path(), 30), 0);
        assert!(foreign.exists());
    }

    #[test]
    fn test_scan_removes_expired_managed_files_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("20250101_0.log"), "old\n").unwrap();
        fs::write(dir.path().join("keep-me.txt"), "old\n").unwrap();

        // Retention of zero days expires anything older than one whole day;
        // fresh files always survive regardless of the window.
        let removed = remove_expired(dir.path(), 0);

        assert_eq!(removed, 0);
        assert!(dir.path().join("20250101_0.log").exists());
        assert!(dir.path().join("keep-me.txt").exists());
    }

    #[test]
    fn test_scan_of_missing_folder_reports_and_returns() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("nope");
        assert_eq!(remove_expired(&gone, 30), 0);
    }
}
