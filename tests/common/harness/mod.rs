//! Test harness for CLI integration tests.
//!
//! Provides isolated archives with their own config directory, a scripted
//! editor, and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::ZettelCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
