//! Interactive controller for the cafe console
//!
//! The menu loop is generic over its input, output and clock so the
//! binary can run it on stdin/stdout and tests can script it.

mod console;
mod menu;

pub use console::*;
pub use menu::*;
