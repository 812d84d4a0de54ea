//! # Host Capabilities
//!
//! The two things the landing logic needs from its host besides the page itself:
//! the current time and a way to run something later. Both are traits so the
//! browser can supply real timers while tests supply virtual ones.

use chrono::{DateTime, Utc};

/// Source of wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by [`lib_utils::now_utc`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        lib_utils::now_utc()
    }
}

/// Fire-and-forget delayed execution.
///
/// Scheduled tasks cannot be cancelled and run on the same thread as the caller,
/// after the current callback has returned.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce() + 'static>);
}
