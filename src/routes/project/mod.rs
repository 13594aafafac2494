pub mod add;
pub mod delete;
pub mod feed;
pub mod get;
pub mod stats;
pub mod update;
