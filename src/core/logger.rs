//! Main logger implementation
//!
//! The logger owns the file writer and up to two background threads: a
//! drain worker (async mode only) moving queued lines to disk, and a
//! maintenance worker handling bucket rollover and retention cleanup.
//! Logging calls never return errors to the caller; internal failures are
//! counted and reported to stderr.

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    queue::{LogQueue, BACKPRESSURE_THRESHOLD},
};
use crate::rotation::{remove_expired, FileWriter};
use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// This timeout is used when the logger is dropped without explicit
/// shutdown. For custom timeout control, use the `shutdown()` method.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Wake interval of the drain worker.
const DRAIN_TICK: Duration = Duration::from_millis(30);

/// Wake interval of the maintenance worker.
const MAINTENANCE_TICK: Duration = Duration::from_millis(500);

/// Minimum interval between retention scans.
const CLEANUP_CYCLE: Duration = Duration::from_secs(24 * 60 * 60);

/// Producer sleep applied when the queue is at the backpressure threshold.
const BACKPRESSURE_SLEEP: Duration = Duration::from_millis(10);

pub struct Logger {
    min_level: RwLock<LogLevel>,
    writer: Arc<Mutex<FileWriter>>,
    /// Present only in async mode.
    queue: Option<Arc<LogQueue>>,
    exit: Arc<AtomicBool>,
    drain_handle: Option<thread::JoinHandle<()>>,
    maintenance_handle: Option<thread::JoinHandle<()>>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Construct a logger and start its background workers.
    ///
    /// The starting sequence index is resolved by scanning the log folder
    /// for files of the current bucket. In async mode a drain worker is
    /// spawned; a maintenance worker is always spawned and performs an
    /// initial retention pass.
    ///
    /// # Errors
    ///
    /// Returns an error only if a worker thread cannot be started. Folder
    /// resolution or creation problems degrade to best-effort logging
    /// instead of failing construction.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        let writer = Arc::new(Mutex::new(FileWriter::new(&config)));
        let metrics = Arc::new(LoggerMetrics::new());
        let exit = Arc::new(AtomicBool::new(false));

        let folder = writer.lock().folder().to_path_buf();

        let (queue, drain_handle) = if config.async_mode {
            let queue = Arc::new(LogQueue::new(BACKPRESSURE_THRESHOLD));
            let handle = spawn_drain_worker(
                Arc::clone(&queue),
                Arc::clone(&writer),
                Arc::clone(&exit),
                Arc::clone(&metrics),
                config.flush_cycle,
            )?;
            (Some(queue), Some(handle))
        } else {
            (None, None)
        };

        let maintenance_handle = spawn_maintenance_worker(
            Arc::clone(&writer),
            Arc::clone(&exit),
            Arc::clone(&metrics),
            folder,
            config.retention_days,
        )?;

        Ok(Self {
            min_level: RwLock::new(config.min_level),
            writer,
            queue,
            exit,
            drain_handle,
            maintenance_handle: Some(maintenance_handle),
            metrics,
        })
    }

    /// Change the minimum level; the only configuration mutable after
    /// construction.
    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Log a message at the given level.
    ///
    /// Below the minimum level this is a no-op. Otherwise the message is
    /// timestamped and either written directly (sync mode) or enqueued for
    /// the drain worker (async mode). Never fails from the caller's
    /// perspective; write failures are counted as dropped.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if level < *self.min_level.read() {
            return;
        }
        if self.exit.load(Ordering::Relaxed) {
            return;
        }

        let line = LogEntry::new(level, message.into()).to_line();

        if let Some(ref queue) = self.queue {
            let throttle = queue.push(line);
            if throttle {
                // Deliberate throttle, not a drop: the producer pays with
                // latency so no message is lost. Sleep outside the lock.
                self.metrics.record_backpressure();
                thread::sleep(BACKPRESSURE_SLEEP);
            }
        } else {
            let mut writer = self.writer.lock();
            match writer.write(&line).and_then(|()| writer.flush()) {
                Ok(()) => {
                    self.metrics.record_logged();
                }
                Err(e) => report_drop(&self.metrics, &e),
            }
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Flush buffered writes to the OS.
    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()
    }

    /// Get the logger metrics for observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Number of lines dropped due to write failures.
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    /// Gracefully shut the logger down with a custom timeout.
    ///
    /// Raises the exit flag and waits for both workers to finish. The drain
    /// worker performs one final unconditional drain before exiting, so
    /// every enqueued message is on disk when this returns `true`.
    ///
    /// Returns `false` if a worker did not terminate within `timeout` or
    /// the final flush failed; an anomaly to report, not a panic.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        self.exit.store(true, Ordering::Relaxed);

        let mut clean = true;
        if let Some(handle) = self.drain_handle.take() {
            clean &= join_with_timeout(handle, timeout, "drain");
        }
        if let Some(handle) = self.maintenance_handle.take() {
            clean &= join_with_timeout(handle, timeout, "maintenance");
        }

        if let Err(e) = self.writer.lock().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
            clean = false;
        }

        clean
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.drain_handle.is_some() || self.maintenance_handle.is_some() {
            self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped lines (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Spawn the drain worker: wakes every [`DRAIN_TICK`], drains the queue
/// when it reaches the threshold or the flush cycle has elapsed since the
/// last drain, and performs a final unconditional drain on exit.
fn spawn_drain_worker(
    queue: Arc<LogQueue>,
    writer: Arc<Mutex<FileWriter>>,
    exit: Arc<AtomicBool>,
    metrics: Arc<LoggerMetrics>,
    flush_cycle: Duration,
) -> Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("rolling-logger-drain".to_string())
        .spawn(move || {
            let mut last_drain = Instant::now();

            while !exit.load(Ordering::Relaxed) {
                thread::sleep(DRAIN_TICK);
                if queue.is_empty() {
                    continue;
                }
                if queue.len() >= queue.threshold() || last_drain.elapsed() >= flush_cycle {
                    let batch = queue.take_all();
                    last_drain = Instant::now();
                    write_batch(&writer, &batch, &metrics);
                }
            }

            // Final drain: nothing buffered may be lost on a clean shutdown.
            let remaining = queue.take_all();
            write_batch(&writer, &remaining, &metrics);
        })
        .map_err(|e| LoggerError::worker_spawn("drain", e.to_string()))
}

/// Spawn the maintenance worker: an initial retention pass, then a
/// [`MAINTENANCE_TICK`] loop doing the bucket-rollover check every tick and
/// the retention scan at most once per [`CLEANUP_CYCLE`].
fn spawn_maintenance_worker(
    writer: Arc<Mutex<FileWriter>>,
    exit: Arc<AtomicBool>,
    metrics: Arc<LoggerMetrics>,
    folder: PathBuf,
    retention_days: u32,
) -> Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("rolling-logger-maintenance".to_string())
        .spawn(move || {
            let removed = remove_expired(&folder, retention_days);
            metrics.record_retention_deletions(removed as u64);
            let mut last_cleanup = Instant::now();

            while !exit.load(Ordering::Relaxed) {
                thread::sleep(MAINTENANCE_TICK);

                if let Err(e) = writer.lock().roll_bucket_if_stale() {
                    eprintln!("[LOGGER WARNING] Bucket rollover failed: {}", e);
                }

                // Elapsed-time gate, not a calendar alarm: a late-starting
                // process still cleans up promptly.
                if last_cleanup.elapsed() >= CLEANUP_CYCLE {
                    let removed = remove_expired(&folder, retention_days);
                    metrics.record_retention_deletions(removed as u64);
                    last_cleanup = Instant::now();
                }
            }
        })
        .map_err(|e| LoggerError::worker_spawn("maintenance", e.to_string()))
}

/// Write a drained batch under one writer lock acquisition, flushing once
/// at the end.
fn write_batch(writer: &Mutex<FileWriter>, batch: &VecDeque<String>, metrics: &LoggerMetrics) {
    if batch.is_empty() {
        return;
    }

    let mut writer = writer.lock();
    for line in batch {
        match writer.write(line) {
            Ok(()) => {
                metrics.record_logged();
            }
            Err(e) => report_drop(metrics, &e),
        }
    }
    if let Err(e) = writer.flush() {
        eprintln!("[LOGGER ERROR] Failed to flush log file: {}", e);
    }
}

/// Count a dropped line; alert on the first drop and every 1000th after.
fn report_drop(metrics: &LoggerMetrics, error: &LoggerError) {
    let dropped = metrics.record_dropped();
    if dropped == 0 || (dropped + 1) % 1000 == 0 {
        eprintln!(
            "[LOGGER WARNING] Dropped log line ({} dropped so far): {}",
            dropped + 1,
            error
        );
    }
}

/// Wait for a worker to finish, bounded by `timeout`. Joins the handle to
/// surface panics; an expired timeout is reported, never escalated.
fn join_with_timeout(handle: thread::JoinHandle<()>, timeout: Duration, worker: &str) -> bool {
    let start = Instant::now();

    loop {
        if handle.is_finished() {
            if let Err(e) = handle.join() {
                eprintln!(
                    "[LOGGER ERROR] {} worker panicked during shutdown: {:?}",
                    worker, e
                );
                return false;
            }
            return true;
        }

        if start.elapsed() >= timeout {
            eprintln!(
                "[LOGGER WARNING] {} worker did not finish within {:?}. \
                 Some logs may be lost.",
                worker, timeout
            );
            return false;
        }

        // Small sleep to avoid busy-waiting
        thread::sleep(Duration::from_millis(10));
    }
}
