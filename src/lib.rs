pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod output;
pub mod pipeline;
pub mod reference;
pub mod report;
pub mod runner;
pub mod scanner;
pub mod source;
pub mod validator;

pub use error::{RefCheckError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_FOUND: i32 = 1;
/// Any failure: config, source input, reference list or report output.
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
