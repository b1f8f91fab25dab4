pub mod hook;
pub mod project;
pub mod serve;
