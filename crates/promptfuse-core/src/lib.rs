//! PromptFuse Core Library
//!
//! Error types and user settings shared by the token analysis crate and the CLI.

pub mod error;
pub mod settings;

pub use error::{PromptFuseError, PromptFuseResult};
pub use settings::{FileSettings, DEFAULT_MODEL, DEFAULT_PHRASE_LENGTH, DEFAULT_TOP};
