//! Utility modules
//!
//! Error handling and logging setup shared by the library and the binary.

pub mod errors;
pub mod logging;

pub use errors::{BotError, Result};
