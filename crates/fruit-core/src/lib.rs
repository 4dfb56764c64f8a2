//! Core types and utilities for the fruit dataset preparation workspace.
//!
//! This crate provides the foundational error taxonomy, configuration
//! structures and CLI helpers shared by the augmentation and captioning
//! crates and tools.

pub mod cli;
pub mod config;
pub mod error;
pub mod types;

pub use cli::*;
pub use config::*;
pub use error::{Error, Result};
pub use types::*;
