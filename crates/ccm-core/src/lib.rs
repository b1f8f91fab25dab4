pub mod config;
pub mod error;
pub mod hook;
pub mod hook_id;
pub mod io;
pub mod locate;
pub mod lock;
pub mod mutate;
pub mod paths;
pub mod service;
pub mod settings;
pub mod validate;

pub use error::{CcmError, FieldError, Result};
