//! # Core Library
//!
//! Host-independent logic of the Officelite landing page: the launch countdown, the
//! waitlist form validator, the presentation effects and the controller tying them
//! together. The browser crate implements the capability traits
//! ([`CountdownDisplay`], [`SignupView`], [`PageEffects`], [`ElementLookup`],
//! [`Scheduler`]) over the DOM; tests implement them in memory.

pub mod config;
pub mod controller;
pub mod countdown;
pub mod effects;
pub mod error;
pub mod runtime;
pub mod signup;

// Re-export commonly used types
pub use config::LandingConfig;
pub use controller::{LandingController, LandingSurface, UiEvent};
pub use countdown::{CountdownDisplay, DisplaySlot, Snapshot, TickOutcome, TimeUnit};
pub use effects::{ElementLookup, ElementRole, PageEffects};
pub use error::{LandingError, Result};
pub use runtime::{Clock, Scheduler, SystemClock};
pub use signup::{Acknowledgment, Rejection, SignupView, Toast};
