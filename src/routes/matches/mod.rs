pub mod get;
pub mod stats;
pub mod update;
