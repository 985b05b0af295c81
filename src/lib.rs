pub mod audit;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod source;
pub mod validator;

pub use error::{Result, TokenGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_AUDIT_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
