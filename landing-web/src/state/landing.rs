//! Landing page state management

use leptos::prelude::*;
use lib_core::{
    LandingConfig, LandingController, LandingError, Result, SystemClock, TickOutcome, UiEvent,
};

use crate::services::dom::DomPage;
use crate::services::effects::load_config;
use crate::services::scheduler::TimerScheduler;

pub type WebController = LandingController<SystemClock, TimerScheduler>;

/// Global landing context
///
/// The controller is `None` when it could not be built; every handler is then a no-op.
#[derive(Clone, Copy)]
pub struct LandingContext {
    controller: StoredValue<Option<WebController>, LocalStorage>,
}

impl LandingContext {
    pub fn new(controller: Option<WebController>) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn config(&self) -> LandingConfig {
        self.controller
            .with_value(|c| c.as_ref().map(|c| c.config().clone()))
            .unwrap_or_default()
    }

    pub fn check_mount(&self, page: &DomPage) -> Result<()> {
        self.controller.with_value(|c| match c {
            Some(controller) => controller.check_mount(page),
            None => Err(LandingError::Config("landing controller unavailable".to_string())),
        })
    }

    pub fn start(&self, page: &DomPage) -> TickOutcome {
        self.controller
            .try_update_value(|c| c.as_mut().map(|controller| controller.start(page)))
            .flatten()
            .unwrap_or(TickOutcome::Halted)
    }

    pub fn tick(&self) -> TickOutcome {
        let Some(page) = DomPage::current() else {
            return TickOutcome::Halted;
        };
        self.controller
            .try_update_value(|c| c.as_mut().map(|controller| controller.tick(&page)))
            .flatten()
            .unwrap_or(TickOutcome::Halted)
    }

    pub fn dispatch(&self, event: UiEvent) {
        let Some(page) = DomPage::current() else {
            log::warn!("No document available for {:?}", event);
            return;
        };
        self.controller.update_value(|c| {
            if let Some(controller) = c.as_mut() {
                controller.dispatch(event, &page);
            }
        });
    }
}

pub fn provide_landing_context() -> LandingContext {
    let config = DomPage::current()
        .map(|page| load_config(&page))
        .unwrap_or_default();

    let controller = match LandingController::new(config, SystemClock, TimerScheduler) {
        Ok(controller) => Some(controller),
        Err(e) => {
            log::error!("Landing controller not created: {}", e);
            None
        }
    };

    let context = LandingContext::new(controller);
    provide_context(context);
    context
}

pub fn use_landing_context() -> LandingContext {
    expect_context::<LandingContext>()
}
