//! Timing scopes and the `--debug-log` event file.
//!
//! Both sinks are process-wide. With `--perf` each finished [`Scope`]
//! prints its duration to stderr; while an event log is open, every scope
//! and every [`log_event`] call is appended to it with a timestamp relative
//! to when the log was opened.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

static PERF_TO_STDERR: AtomicBool = AtomicBool::new(false);
static EVENT_LOG: Mutex<Option<EventLog>> = Mutex::new(None);

const LOG_HEADER: &str = "linedit debug log start";

/// Times the region it lives in; reports when dropped.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        let ms = millis(self.start.elapsed());
        log_event(self.name, format!("{ms:.3} ms"));
        if is_enabled() {
            eprintln!("[perf] {}: {ms:.2} ms", self.name);
        }
    }
}

#[derive(Debug)]
struct EventLog {
    opened_at: Instant,
    out: BufWriter<File>,
}

impl EventLog {
    fn create(path: &Path) -> io::Result<Self> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "{LOG_HEADER}")?;
        out.flush()?;
        Ok(Self {
            opened_at: Instant::now(),
            out,
        })
    }

    fn record(&mut self, name: &str, detail: &str) -> io::Result<()> {
        let at = millis(self.opened_at.elapsed());
        writeln!(self.out, "[{at:>10.3} ms] {name}: {detail}")?;
        self.out.flush()
    }
}

fn event_log() -> MutexGuard<'static, Option<EventLog>> {
    EVENT_LOG.lock().unwrap_or_else(PoisonError::into_inner)
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Turn stderr timing output on or off.
pub fn set_enabled(enabled: bool) {
    PERF_TO_STDERR.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    PERF_TO_STDERR.load(Ordering::Relaxed)
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

/// Open a fresh event log at `path`, or close the current one with `None`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or its header
/// cannot be written. The previously open log stays in place.
pub fn set_debug_log_path(path: Option<&Path>) -> io::Result<()> {
    let next = path.map(EventLog::create).transpose()?;
    *event_log() = next;
    Ok(())
}

pub fn is_debug_log_enabled() -> bool {
    event_log().is_some()
}

/// Append one event line to the debug log, if one is open.
pub fn log_event(name: &str, detail: impl AsRef<str>) {
    if let Some(log) = event_log().as_mut()
        && let Err(err) = log.record(name, detail.as_ref())
    {
        tracing::debug!(%err, event = name, "debug log write failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_set_enabled_toggles_runtime_flag() {
        set_enabled(true);
        assert!(is_enabled());

        set_enabled(false);
        assert!(!is_enabled());
    }

    // One test owns the global log so parallel tests cannot swap it out.
    #[test]
    fn test_debug_log_records_events_and_scopes() {
        let first = NamedTempFile::new().unwrap();
        let second = NamedTempFile::new().unwrap();

        set_debug_log_path(Some(first.path())).unwrap();
        assert!(is_debug_log_enabled());
        log_event("event.message", "msg=Newline");
        drop(scope("editor.save"));

        set_debug_log_path(Some(second.path())).unwrap();
        log_event("event.after_switch", "frame=2");

        set_debug_log_path(None).unwrap();
        assert!(!is_debug_log_enabled());
        log_event("event.after_close", "dropped");

        let first_log = std::fs::read_to_string(first.path()).unwrap();
        assert!(first_log.starts_with(LOG_HEADER));
        assert!(first_log.contains("event.message: msg=Newline"));
        assert!(first_log.contains("editor.save: "));
        assert!(!first_log.contains("event.after_switch"));

        let second_log = std::fs::read_to_string(second.path()).unwrap();
        assert!(second_log.contains("event.after_switch: frame=2"));
        assert!(!second_log.contains("event.after_close"));
    }

    #[test]
    fn test_debug_log_path_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = set_debug_log_path(Some(&dir.path().join("nope").join("x.log")));
        assert!(err.is_err());
    }
}
