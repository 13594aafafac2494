mod matches;
mod stats;

pub use matches::*;
pub use stats::*;
