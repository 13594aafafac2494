mod interest;
mod project;
mod project_match;
mod user;

pub use interest::*;
pub use project::*;
pub use project_match::*;
pub use user::*;
