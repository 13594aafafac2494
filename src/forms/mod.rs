mod identity;
mod match_update;
mod profile;
mod project;
mod swipe;

pub use identity::*;
pub use match_update::*;
pub use profile::*;
pub use project::*;
pub use swipe::*;
