//! In-memory stand-ins for the browser: a page, a virtual-time scheduler and a
//! settable clock.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use lib_core::controller::LandingController;
use lib_core::countdown::{CountdownDisplay, DisplaySlot, TimeUnit};
use lib_core::effects::{ElementLookup, ElementRole, PageEffects};
use lib_core::runtime::{Clock, Scheduler};
use lib_core::signup::{Acknowledgment, SignupView, Toast};
use lib_core::LandingConfig;

// region:    --- Clock

#[derive(Clone)]
pub struct TestClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl TestClock {
    pub fn new() -> Self {
        let start = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    pub fn advance_ms(&self, ms: i64) {
        self.now.set(self.now.get() + Duration::milliseconds(ms));
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

// endregion: --- Clock

// region:    --- Scheduler

type Task = Box<dyn FnOnce() + 'static>;

#[derive(Default)]
struct SchedulerState {
    now: u64,
    seq: u64,
    tasks: Vec<(u64, u64, Task)>,
}

/// Runs scheduled tasks only when virtual time is advanced.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Advance virtual time, running due tasks in deadline then FIFO order.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let position = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _, _))| *due <= target)
                    .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                    .map(|(i, _)| i);
                position.map(|i| {
                    let (due, _, task) = state.tasks.remove(i);
                    state.now = due;
                    task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let mut state = self.state.borrow_mut();
        let due = state.now + u64::from(delay_ms);
        let seq = state.seq;
        state.seq += 1;
        state.tasks.push((due, seq, task));
    }
}

// endregion: --- Scheduler

// region:    --- Page

#[derive(Clone, Debug, Default)]
pub struct SlotState {
    pub text: String,
    pub emphasized: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub heading: String,
    pub body: String,
    pub fading: bool,
    pub removed: bool,
}

#[derive(Debug, Default)]
pub struct PageState {
    pub slots: HashMap<TimeUnit, SlotState>,
    pub email: Option<String>,
    pub placeholder: Option<String>,
    pub focused: bool,
    pub error_text: String,
    pub error_visible: bool,
    pub toasts: Vec<ToastState>,
    pub cards: Vec<HashMap<String, String>>,
    pub time_units: Vec<HashMap<String, String>>,
    pub scrolls: usize,
    pub smooth_scroll: bool,
    pub stylesheets: Vec<String>,
    pub missing: HashSet<&'static str>,
}

#[derive(Clone, Default)]
pub struct FakePage {
    pub state: Rc<RefCell<PageState>>,
}

impl FakePage {
    /// A page with every element present, three pricing cards and four time units.
    pub fn complete() -> Self {
        let page = Self::default();
        {
            let mut state = page.state.borrow_mut();
            for unit in TimeUnit::ALL {
                state.slots.insert(unit, SlotState::default());
            }
            state.email = Some(String::new());
            state.cards = vec![HashMap::new(); 3];
            state.time_units = vec![HashMap::new(); 4];
        }
        page
    }

    pub fn remove_slot(&self, unit: TimeUnit) {
        self.state.borrow_mut().slots.remove(&unit);
    }

    pub fn remove(&self, role: ElementRole) {
        self.state.borrow_mut().missing.insert(role.selector());
        if role == ElementRole::EmailInput {
            self.state.borrow_mut().email = None;
        }
    }

    pub fn type_email(&self, value: &str) {
        self.state.borrow_mut().email = Some(value.to_string());
    }

    pub fn email(&self) -> Option<String> {
        self.state.borrow().email.clone()
    }

    pub fn slot_text(&self, unit: TimeUnit) -> Option<String> {
        self.state.borrow().slots.get(&unit).map(|s| s.text.clone())
    }

    pub fn slot_texts(&self) -> Vec<String> {
        TimeUnit::ALL
            .iter()
            .map(|&unit| self.slot_text(unit).unwrap_or_default())
            .collect()
    }

    pub fn set_slot_text(&self, unit: TimeUnit, text: &str) {
        if let Some(slot) = self.state.borrow_mut().slots.get_mut(&unit) {
            slot.text = text.to_string();
        }
    }

    pub fn emphasized(&self, unit: TimeUnit) -> bool {
        self.state
            .borrow()
            .slots
            .get(&unit)
            .map(|s| s.emphasized)
            .unwrap_or(false)
    }

    pub fn card_style(&self, index: usize, property: &str) -> Option<String> {
        self.state.borrow().cards.get(index)?.get(property).cloned()
    }

    pub fn time_unit_style(&self, index: usize, property: &str) -> Option<String> {
        self.state.borrow().time_units.get(index)?.get(property).cloned()
    }

    pub fn toast(&self, index: usize) -> Option<ToastState> {
        self.state.borrow().toasts.get(index).cloned()
    }
}

pub struct FakeSlot {
    state: Rc<RefCell<PageState>>,
    unit: TimeUnit,
}

impl DisplaySlot for FakeSlot {
    fn text(&self) -> String {
        self.state.borrow().slots[&self.unit].text.clone()
    }

    fn set_text(&self, text: &str) {
        if let Some(slot) = self.state.borrow_mut().slots.get_mut(&self.unit) {
            slot.text = text.to_string();
        }
    }

    fn emphasize(&self) {
        if let Some(slot) = self.state.borrow_mut().slots.get_mut(&self.unit) {
            slot.emphasized = true;
        }
    }

    fn settle(&self) {
        if let Some(slot) = self.state.borrow_mut().slots.get_mut(&self.unit) {
            slot.emphasized = false;
        }
    }
}

impl CountdownDisplay for FakePage {
    type Slot = FakeSlot;

    fn time_slot(&self, unit: TimeUnit) -> Option<FakeSlot> {
        self.state.borrow().slots.contains_key(&unit).then(|| FakeSlot {
            state: self.state.clone(),
            unit,
        })
    }
}

pub struct FakeToast {
    state: Rc<RefCell<PageState>>,
    index: usize,
}

impl Toast for FakeToast {
    fn fade_out(&self) {
        self.state.borrow_mut().toasts[self.index].fading = true;
    }

    fn remove(&self) {
        self.state.borrow_mut().toasts[self.index].removed = true;
    }
}

impl SignupView for FakePage {
    type Toast = FakeToast;

    fn email_value(&self) -> Option<String> {
        self.state.borrow().email.clone()
    }

    fn set_email_value(&self, value: &str) {
        let mut state = self.state.borrow_mut();
        if let Some(email) = state.email.as_mut() {
            *email = value.to_string();
        }
    }

    fn show_error(&self, message: &str) {
        let mut state = self.state.borrow_mut();
        state.error_text = message.to_string();
        state.error_visible = true;
    }

    fn hide_error(&self) {
        self.state.borrow_mut().error_visible = false;
    }

    fn show_acknowledgment(&self, acknowledgment: &Acknowledgment) -> Option<FakeToast> {
        let mut state = self.state.borrow_mut();
        state.toasts.push(ToastState {
            heading: Acknowledgment::HEADING.to_string(),
            body: acknowledgment.body(),
            fading: false,
            removed: false,
        });
        Some(FakeToast {
            state: self.state.clone(),
            index: state.toasts.len() - 1,
        })
    }
}

impl PageEffects for FakePage {
    fn card_count(&self) -> usize {
        self.state.borrow().cards.len()
    }

    fn set_card_style(&self, index: usize, property: &str, value: &str) {
        if let Some(card) = self.state.borrow_mut().cards.get_mut(index) {
            card.insert(property.to_string(), value.to_string());
        }
    }

    fn time_unit_count(&self) -> usize {
        self.state.borrow().time_units.len()
    }

    fn set_time_unit_style(&self, index: usize, property: &str, value: &str) {
        if let Some(unit) = self.state.borrow_mut().time_units.get_mut(index) {
            unit.insert(property.to_string(), value.to_string());
        }
    }

    fn scroll_to_signup(&self) {
        self.state.borrow_mut().scrolls += 1;
    }

    fn focus_email(&self) {
        self.state.borrow_mut().focused = true;
    }

    fn set_email_placeholder(&self, text: &str) {
        self.state.borrow_mut().placeholder = Some(text.to_string());
    }

    fn enable_smooth_scroll(&self) {
        self.state.borrow_mut().smooth_scroll = true;
    }

    fn inject_stylesheet(&self, css: &str) {
        self.state.borrow_mut().stylesheets.push(css.to_string());
    }
}

impl ElementLookup for FakePage {
    fn is_present(&self, role: ElementRole) -> bool {
        !self.state.borrow().missing.contains(role.selector())
    }
}

// endregion: --- Page

pub type TestController = LandingController<TestClock, ManualScheduler>;

pub struct Harness {
    pub controller: TestController,
    pub clock: TestClock,
    pub scheduler: ManualScheduler,
    pub page: FakePage,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(LandingConfig::default())
    }

    pub fn with_config(config: LandingConfig) -> Self {
        let clock = TestClock::new();
        let scheduler = ManualScheduler::default();
        let controller = LandingController::new(config, clock.clone(), scheduler.clone())
            .expect("default config is valid");
        Self {
            controller,
            clock,
            scheduler,
            page: FakePage::complete(),
        }
    }
}
