pub mod health_checks;
pub(crate) mod matches;
pub(crate) mod project;
pub(crate) mod swipe;
pub(crate) mod user;

pub use health_checks::*;
