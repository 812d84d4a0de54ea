//! Browser-side implementations of the landing page capabilities

pub mod dom;
pub mod effects;
pub mod scheduler;
