//! High-level operations.
//!
//! This module contains the implementation of patternbook commands.

pub mod interactive;
pub mod use_case;

pub use interactive::{run_interactive, InteractiveError, Menu, Selection};
pub use use_case::run_use_case;
