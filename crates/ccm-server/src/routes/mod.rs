pub mod hooks;
pub mod projects;
