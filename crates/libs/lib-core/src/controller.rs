//! # Landing Controller
//!
//! Owns the countdown engine, the signup form state and the configuration, and
//! routes every page event to the matching handler. Built once at startup.

use crate::config::LandingConfig;
use crate::countdown::{CountdownDisplay, CountdownEngine, TickOutcome};
use crate::effects::{
    plan_placeholder, ElementLookup, ElementRole, PageEffects, CARD_HOVER_TRANSFORM,
    CARD_REST_TRANSFORM, CARD_REVEAL_ANIMATION, FADE_KEYFRAMES, TIME_UNIT_LOAD_ANIMATION,
};
use crate::error::{LandingError, Result};
use crate::runtime::{Clock, Scheduler};
use crate::signup::{SignupForm, SignupView, SubmitOutcome, ToastTimings};

/// Everything the controller drives. Handles are cheap to clone and can be moved
/// into delayed tasks.
pub trait LandingSurface:
    CountdownDisplay + SignupView + PageEffects + ElementLookup + Clone + 'static
{
}

impl<T> LandingSurface for T where
    T: CountdownDisplay + SignupView + PageEffects + ElementLookup + Clone + 'static
{
}

/// Events the page forwards to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The email input changed.
    EmailInput,
    /// The signup form was submitted.
    Submit,
    PointerEnter(usize),
    PointerLeave(usize),
    /// A plan's "try for free" button was clicked.
    PlanSelected(String),
    HeroCta,
    /// A pricing card scrolled into view.
    CardRevealed(usize),
    /// The document finished loading.
    PageLoaded,
}

pub struct LandingController<C, S> {
    config: LandingConfig,
    clock: C,
    scheduler: S,
    countdown: CountdownEngine,
    signup: SignupForm,
}

impl<C, S> LandingController<C, S>
where
    C: Clock,
    S: Scheduler + Clone + 'static,
{
    /// Validate `config` and fix the target instant at `now + countdown_days`.
    pub fn new(config: LandingConfig, clock: C, scheduler: S) -> Result<Self> {
        config.validate()?;
        let target = lib_utils::add_days(clock.now(), config.countdown_days)?;
        let countdown = CountdownEngine::new(target, config.emphasis_delay_ms);

        Ok(Self {
            config,
            clock,
            scheduler,
            countdown,
            signup: SignupForm::new(),
        })
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn countdown(&self) -> &CountdownEngine {
        &self.countdown
    }

    pub fn signup(&self) -> &SignupForm {
        &self.signup
    }

    /// Verify the page carries every element the behaviors need.
    ///
    /// Absent elements are only an error with `strict_mounting`; otherwise they are
    /// logged and the dependent behavior silently does nothing.
    pub fn check_mount<P: ElementLookup>(&self, page: &P) -> Result<()> {
        for role in ElementRole::REQUIRED {
            if page.is_present(role) {
                continue;
            }
            if self.config.strict_mounting {
                return Err(LandingError::MissingElement(format!(
                    "{:?} ({})",
                    role,
                    role.selector()
                )));
            }
            tracing::debug!("Element {} not found, behavior skipped", role.selector());
        }
        Ok(())
    }

    /// One-time page setup followed by the first countdown render.
    pub fn start<P: LandingSurface>(&mut self, page: &P) -> TickOutcome {
        tracing::info!("✨ {} landing page initialized!", self.config.product_name);
        tracing::info!(
            "🎯 Countdown target: {}",
            lib_utils::format_local_date(self.countdown.target())
        );

        page.enable_smooth_scroll();
        page.inject_stylesheet(FADE_KEYFRAMES);
        for index in 0..page.card_count() {
            page.set_card_style(index, "opacity", "0");
        }

        self.tick(page)
    }

    pub fn tick<P: CountdownDisplay>(&mut self, page: &P) -> TickOutcome {
        let now = self.clock.now();
        self.countdown.tick(now, page, &self.scheduler)
    }

    pub fn dispatch<P: LandingSurface>(&mut self, event: UiEvent, page: &P) {
        match event {
            UiEvent::EmailInput => self.signup.handle_input(page),
            UiEvent::Submit => {
                let timings = ToastTimings {
                    display_ms: self.config.success_display_ms,
                    fade_ms: self.config.success_fade_ms,
                };
                if let SubmitOutcome::Rejected(rejection) =
                    self.signup.handle_submit(page, &self.scheduler, timings)
                {
                    tracing::debug!("Signup rejected: {}", rejection.message());
                }
            }
            UiEvent::PointerEnter(card) => {
                page.set_card_style(card, "transform", CARD_HOVER_TRANSFORM)
            }
            UiEvent::PointerLeave(card) => {
                page.set_card_style(card, "transform", CARD_REST_TRANSFORM)
            }
            UiEvent::PlanSelected(plan) => {
                page.scroll_to_signup();
                let placeholder = plan_placeholder(&plan);
                let page = page.clone();
                self.scheduler.schedule(
                    self.config.focus_delay_ms,
                    Box::new(move || {
                        page.focus_email();
                        page.set_email_placeholder(&placeholder);
                    }),
                );
            }
            UiEvent::HeroCta => {
                page.scroll_to_signup();
                let page = page.clone();
                self.scheduler
                    .schedule(self.config.focus_delay_ms, Box::new(move || page.focus_email()));
            }
            UiEvent::CardRevealed(card) => {
                page.set_card_style(card, "animation", CARD_REVEAL_ANIMATION)
            }
            UiEvent::PageLoaded => {
                for index in 0..page.time_unit_count() {
                    let page = page.clone();
                    let delay = self.config.load_stagger_ms.saturating_mul(index as u32);
                    self.scheduler.schedule(
                        delay,
                        Box::new(move || {
                            page.set_time_unit_style(index, "animation", TIME_UNIT_LOAD_ANIMATION)
                        }),
                    );
                }
            }
        }
    }
}
