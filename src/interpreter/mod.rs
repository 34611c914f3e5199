//! Line-based command prompt over an address book.
//!
//! This module parses free-text command lines and maps them onto address
//! book operations, rendering every result (including errors) as text.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{Interpreter, Reply, NOT_FOUND_REPLY};
