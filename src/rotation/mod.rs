//! File rotation: time buckets, the rotating file writer, and retention
//! cleanup of expired files.

pub mod bucket;
pub mod retention;
pub mod writer;

pub use bucket::Rollover;
pub use retention::remove_expired;
pub use writer::FileWriter;

/// Split a managed log-file name into its bucket key and sequence index.
///
/// Managed names have the shape `<bucket>_<sequence>.log` where both parts
/// are decimal digits. Anything else (foreign files, temp files, names with
/// extra underscores) returns `None` and is left alone by rotation and
/// retention.
pub fn parse_file_name(name: &str) -> Option<(&str, u64)> {
    let stem = name.strip_suffix(".log")?;
    let (bucket, sequence) = stem.split_once('_')?;
    if bucket.is_empty() || !bucket.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let sequence: u64 = sequence.parse().ok()?;
    Some((bucket, sequence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert_eq!(parse_file_name("20250101_0.log"), Some(("20250101", 0)));
        assert_eq!(parse_file_name("20250101_17.log"), Some(("20250101", 17)));
        assert_eq!(
            parse_file_name("2025010114_3.log"),
            Some(("2025010114", 3))
        );
    }

    #[test]
    fn test_parse_rejects_foreign_names() {
        assert_eq!(parse_file_name("app.log"), None);
        assert_eq!(parse_file_name("20250101.log"), None);
        assert_eq!(parse_file_name("20250101_0.txt"), None);
        assert_eq!(parse_file_name("notes_1.log"), None);
        assert_eq!(parse_file_name("20250101_0.log.tmp"), None);
        assert_eq!(parse_file_name("_0.log"), None);
        assert_eq!(parse_file_name("20250101_.log"), None);
        assert_eq!(parse_file_name("20250101_a_0.log"), None);
    }
}
