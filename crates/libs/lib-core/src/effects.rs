//! # Page Effects
//!
//! Presentation-only behaviors around the countdown and the form: pricing-card hover,
//! scroll-to-signup, reveal-on-scroll, the staggered load-in of the time units and the
//! injected fade keyframes. None of them keeps state; they are styles applied to
//! elements found by role.

/// Hover transform of a pricing card.
pub const CARD_HOVER_TRANSFORM: &str = "translateY(-12px) scale(1.02)";
pub const CARD_REST_TRANSFORM: &str = "translateY(0) scale(1)";

/// Animation of a pricing card scrolling into view.
pub const CARD_REVEAL_ANIMATION: &str = "fadeInUp 0.6s ease forwards";

/// Animation of a countdown time unit after the page loads.
pub const TIME_UNIT_LOAD_ANIMATION: &str = "fadeInUp 0.5s ease forwards";

/// Entry and exit animations of the acknowledgment popup.
pub const TOAST_FADE_IN: &str = "fadeIn 0.3s ease";
pub const TOAST_FADE_OUT: &str = "fadeOut 0.3s ease";

/// Keyframes injected once at startup.
pub const FADE_KEYFRAMES: &str = r#"
    @keyframes fadeIn {
        from {
            opacity: 0;
            transform: translate(-50%, -50%) scale(0.9);
        }
        to {
            opacity: 1;
            transform: translate(-50%, -50%) scale(1);
        }
    }

    @keyframes fadeOut {
        from {
            opacity: 1;
            transform: translate(-50%, -50%) scale(1);
        }
        to {
            opacity: 0;
            transform: translate(-50%, -50%) scale(0.9);
        }
    }
"#;

/// Placeholder shown after a visitor picks a plan.
pub fn plan_placeholder(plan: &str) -> String {
    format!("Get started with {} plan - Enter your email", plan)
}

/// Elements the page behaviors rely on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRole {
    DaysSlot,
    HoursSlot,
    MinutesSlot,
    SecondsSlot,
    SignupForm,
    EmailInput,
    ErrorMessage,
    SignupSection,
    HeroCta,
}

impl ElementRole {
    pub const REQUIRED: [ElementRole; 9] = [
        ElementRole::DaysSlot,
        ElementRole::HoursSlot,
        ElementRole::MinutesSlot,
        ElementRole::SecondsSlot,
        ElementRole::SignupForm,
        ElementRole::EmailInput,
        ElementRole::ErrorMessage,
        ElementRole::SignupSection,
        ElementRole::HeroCta,
    ];

    /// CSS selector locating the element.
    pub fn selector(self) -> &'static str {
        match self {
            ElementRole::DaysSlot => "#days",
            ElementRole::HoursSlot => "#hours",
            ElementRole::MinutesSlot => "#minutes",
            ElementRole::SecondsSlot => "#seconds",
            ElementRole::SignupForm => "#signup-form",
            ElementRole::EmailInput => "#email-input",
            ElementRole::ErrorMessage => "#error-message",
            ElementRole::SignupSection => ".countdown-section",
            ElementRole::HeroCta => "#hero-cta",
        }
    }
}

pub trait ElementLookup {
    fn is_present(&self, role: ElementRole) -> bool;
}

/// Styling and navigation side effects on the page.
///
/// Cards and time units are addressed by their position in document order; an index
/// past the end is ignored.
pub trait PageEffects {
    fn card_count(&self) -> usize;
    fn set_card_style(&self, index: usize, property: &str, value: &str);
    fn time_unit_count(&self) -> usize;
    fn set_time_unit_style(&self, index: usize, property: &str, value: &str);
    fn scroll_to_signup(&self);
    fn focus_email(&self);
    fn set_email_placeholder(&self, text: &str);
    fn enable_smooth_scroll(&self);
    fn inject_stylesheet(&self, css: &str);
}
