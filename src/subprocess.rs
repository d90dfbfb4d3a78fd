//! Blocking external process invocation.
//!
//! The typesetting tool is an opaque subprocess: spawn, wait, read the exit
//! code. The wait is a poll loop so it can observe a timeout deadline or a
//! cancellation request; in both cases the child is killed and reaped before
//! returning, so an interrupted run leaves no orphaned process behind.

use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::constants::CHILD_POLL_INTERVAL;

/// Outcome of waiting for a spawned child.
#[derive(Debug)]
pub enum WaitOutcome {
    /// The child exited on its own.
    Exited(std::process::ExitStatus),
    /// The timeout deadline passed; the child was killed.
    TimedOut,
    /// Cancellation was requested; the child was killed.
    Cancelled,
}

/// Set when the user interrupts the run. Checked between status polls and
/// between units.
static CANCEL_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Request cancellation of the running build. Safe to call from a signal
/// handler thread.
pub fn request_cancel() {
    CANCEL_REQUESTED.store(true, Ordering::SeqCst);
}

/// Whether cancellation has been requested.
pub fn cancel_requested() -> bool {
    CANCEL_REQUESTED.load(Ordering::SeqCst)
}

/// Spawn `command` with `args` in `working_dir` and wait for it to exit.
///
/// The child's stdout and stderr are discarded: the tool's diagnostics are
/// not consumed, only the exit code is inspected. A typesetting tool writes
/// its own log file next to the document.
pub fn run_blocking(
    command: &str,
    args: &[&str],
    working_dir: &Path,
    timeout: Option<Duration>,
) -> std::io::Result<WaitOutcome> {
    let mut child = Command::new(command)
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    wait_for_exit(&mut child, timeout)
}

fn wait_for_exit(child: &mut Child, timeout: Option<Duration>) -> std::io::Result<WaitOutcome> {
    let deadline = timeout.map(|t| Instant::now() + t);

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(WaitOutcome::Exited(status));
        }

        if cancel_requested() {
            kill_and_reap(child);
            return Ok(WaitOutcome::Cancelled);
        }

        if deadline.is_some_and(|d| Instant::now() >= d) {
            kill_and_reap(child);
            return Ok(WaitOutcome::TimedOut);
        }

        thread::sleep(CHILD_POLL_INTERVAL);
    }
}

fn kill_and_reap(child: &mut Child) {
    // Kill can race a child that already exited; the wait below reaps either way.
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_run_blocking_reports_exit_status() {
        let outcome = run_blocking("true", &[], Path::new("."), None).unwrap();
        match outcome {
            WaitOutcome::Exited(status) => assert!(status.success()),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_blocking_reports_nonzero_exit() {
        let outcome = run_blocking("false", &[], Path::new("."), None).unwrap();
        match outcome {
            WaitOutcome::Exited(status) => assert_eq!(status.code(), Some(1)),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_blocking_times_out_and_kills_child() {
        let start = Instant::now();
        let outcome = run_blocking(
            "sleep",
            &["5"],
            Path::new("."),
            Some(Duration::from_millis(200)),
        )
        .unwrap();
        assert!(matches!(outcome, WaitOutcome::TimedOut));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_spawn_failure_is_io_error() {
        let result = run_blocking("texbatch-no-such-command", &[], Path::new("."), None);
        assert!(result.is_err());
    }
}
