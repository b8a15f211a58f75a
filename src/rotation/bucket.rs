//! Time buckets partitioning log files

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Granularity of the time bucket that partitions log files.
///
/// Each bucket gets its own file-name prefix; size rotation within a bucket
/// only advances the sequence suffix.
///
/// # Examples
///
/// ```
/// use rolling_logger::rotation::bucket::Rollover;
/// use chrono::{Local, TimeZone};
///
/// let t = Local.with_ymd_and_hms(2025, 1, 8, 14, 0, 0).single().unwrap();
/// assert_eq!(Rollover::Daily.bucket_key(&t), "20250108");
/// assert_eq!(Rollover::Hourly.bucket_key(&t), "2025010814");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum Rollover {
    /// One bucket per calendar day: `YYYYMMDD`
    Daily,
    /// One bucket per clock hour: `YYYYMMDDHH`
    #[default]
    Hourly,
}

impl Rollover {
    /// Bucket key for the given local wall-clock time.
    #[must_use]
    pub fn bucket_key(&self, time: &DateTime<Local>) -> String {
        match self {
            Rollover::Daily => time.format("%Y%m%d").to_string(),
            Rollover::Hourly => time.format("%Y%m%d%H").to_string(),
        }
    }

    /// Bucket key for the current local time.
    #[must_use]
    pub fn current_key(&self) -> String {
        self.bucket_key(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 9, 5, 59)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_daily_key() {
        assert_eq!(Rollover::Daily.bucket_key(&fixed_time()), "20250108");
    }

    #[test]
    fn test_hourly_key_zero_pads_hour() {
        assert_eq!(Rollover::Hourly.bucket_key(&fixed_time()), "2025010809");
    }

    #[test]
    fn test_keys_change_with_hour_but_daily_does_not() {
        let later = fixed_time() + chrono::Duration::hours(3);
        assert_ne!(
            Rollover::Hourly.bucket_key(&fixed_time()),
            Rollover::Hourly.bucket_key(&later)
        );
        assert_eq!(
            Rollover::Daily.bucket_key(&fixed_time()),
            Rollover::Daily.bucket_key(&later)
        );
    }
}
