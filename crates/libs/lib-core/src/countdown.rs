//! # Countdown Engine
//!
//! Computes the time remaining until a fixed target instant and renders it into four
//! display slots (days, hours, minutes, seconds).
//!
//! ## Tick Lifecycle
//!
//! ```text
//!  tick ──► distance >= 0 ──► all slots present? ──► emphasize changed slots,
//!    │                              │                 commit text after a delay
//!    │                              └─ no ──────────► Skipped
//!    └────► distance < 0  ──► force "00" ──► Finished (once) ──► Halted (forever)
//! ```
//!
//! The engine never owns the repeating timer. Its caller keeps ticking while
//! [`TickOutcome::keeps_running`] is true.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::runtime::Scheduler;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60_000;
pub const MS_PER_HOUR: u64 = 3_600_000;
pub const MS_PER_DAY: u64 = 86_400_000;

/// Text every slot shows once the target instant has passed.
pub const FINISHED_TEXT: &str = "00";

/// Transform applied while a slot is about to change.
pub const EMPHASIS_TRANSFORM: &str = "scale(1.1)";
pub const EMPHASIS_TRANSITION: &str = "transform 0.2s ease";
pub const SETTLED_TRANSFORM: &str = "scale(1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 4] = [
        TimeUnit::Days,
        TimeUnit::Hours,
        TimeUnit::Minutes,
        TimeUnit::Seconds,
    ];

    /// DOM id of the slot rendering this unit.
    pub fn element_id(self) -> &'static str {
        match self {
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Days => "Days",
            TimeUnit::Hours => "Hours",
            TimeUnit::Minutes => "Min",
            TimeUnit::Seconds => "Sec",
        }
    }
}

/// Remaining time decomposed into whole units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Snapshot {
    /// Decompose a non-negative distance by floor division over decreasing unit sizes.
    pub fn from_remaining_ms(distance: u64) -> Self {
        Self {
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn value(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Days => self.days,
            TimeUnit::Hours => self.hours,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Seconds => self.seconds,
        }
    }

    pub fn formatted(&self, unit: TimeUnit) -> String {
        format_unit(self.value(unit))
    }

    /// Milliseconds accounted for by this snapshot.
    pub fn as_millis(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }
}

/// Zero-pad to two digits. Wider values are kept whole (`100` stays `"100"`).
pub fn format_unit(value: u64) -> String {
    format!("{:02}", value)
}

/// A text-bearing element showing one unit.
///
/// Handles are cheap clones of the underlying element and may outlive the tick
/// that produced them (the delayed commit holds one).
pub trait DisplaySlot {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// Apply the brief emphasis shown before a value changes.
    fn emphasize(&self);
    /// Drop the emphasis again.
    fn settle(&self);
}

/// Lookup of the four display slots. Any of them may be absent.
pub trait CountdownDisplay {
    type Slot: DisplaySlot + 'static;

    fn time_slot(&self, unit: TimeUnit) -> Option<Self::Slot>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snapshot computed and changed slots scheduled for commit.
    Rendered(Snapshot),
    /// Snapshot computed but at least one slot was absent, nothing touched.
    Skipped(Snapshot),
    /// The target instant passed on this tick; slots forced to `"00"`.
    Finished,
    /// The engine had already finished; nothing happened.
    Halted,
}

impl TickOutcome {
    pub fn keeps_running(&self) -> bool {
        matches!(self, TickOutcome::Rendered(_) | TickOutcome::Skipped(_))
    }
}

#[derive(Debug)]
pub struct CountdownEngine {
    target: DateTime<Utc>,
    emphasis_delay_ms: u32,
    // Shared with pending commits so none of them lands after the final "00".
    finished: Rc<Cell<bool>>,
}

impl CountdownEngine {
    pub fn new(target: DateTime<Utc>, emphasis_delay_ms: u32) -> Self {
        Self {
            target,
            emphasis_delay_ms,
            finished: Rc::new(Cell::new(false)),
        }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished.get()
    }

    /// Signed milliseconds from `now` until the target.
    pub fn distance_ms(&self, now: DateTime<Utc>) -> i64 {
        (self.target - now).num_milliseconds()
    }

    pub fn tick<D, S>(&mut self, now: DateTime<Utc>, display: &D, scheduler: &S) -> TickOutcome
    where
        D: CountdownDisplay,
        S: Scheduler,
    {
        if self.finished.get() {
            return TickOutcome::Halted;
        }

        let distance = self.distance_ms(now);
        if distance < 0 {
            self.finish(display);
            return TickOutcome::Finished;
        }

        let snapshot = Snapshot::from_remaining_ms(distance.unsigned_abs());

        let slots: Option<Vec<(TimeUnit, D::Slot)>> = TimeUnit::ALL
            .iter()
            .map(|&unit| display.time_slot(unit).map(|slot| (unit, slot)))
            .collect();

        let Some(slots) = slots else {
            tracing::debug!("Countdown slots not all present, skipping render");
            return TickOutcome::Skipped(snapshot);
        };

        for (unit, slot) in slots {
            let next = snapshot.formatted(unit);
            if slot.text() == next {
                continue;
            }
            slot.emphasize();
            let finished = Rc::clone(&self.finished);
            scheduler.schedule(
                self.emphasis_delay_ms,
                Box::new(move || {
                    if !finished.get() {
                        slot.set_text(&next);
                    }
                    slot.settle();
                }),
            );
        }

        TickOutcome::Rendered(snapshot)
    }

    fn finish<D: CountdownDisplay>(&mut self, display: &D) {
        self.finished.set(true);
        for unit in TimeUnit::ALL {
            if let Some(slot) = display.time_slot(unit) {
                slot.set_text(FINISHED_TEXT);
            }
        }
        tracing::info!("Countdown reached its target, timer halted");
    }
}
