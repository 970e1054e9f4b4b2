//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns, currently
//! just the system clipboard.

pub mod clipboard;

pub use clipboard::*;
