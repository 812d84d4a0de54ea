//! Timer-backed scheduler

use gloo_timers::callback::Timeout;
use lib_core::Scheduler;

/// Runs tasks on `setTimeout`. Handles are forgotten, so tasks always fire.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce() + 'static>) {
        Timeout::new(delay_ms, task).forget();
    }
}
