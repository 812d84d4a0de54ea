//! UI Components

pub mod countdown;
pub mod hero;
pub mod pricing;
pub mod waitlist_form;

pub use countdown::CountdownSection;
pub use hero::Hero;
pub use pricing::Pricing;
pub use waitlist_form::WaitlistForm;
