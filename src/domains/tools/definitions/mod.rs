//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod send_message;

pub use send_message::{InputError, SendMessageInput, SendMessageTool};
