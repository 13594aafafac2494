pub mod interest;
pub mod project;
pub mod project_match;
pub mod user;
