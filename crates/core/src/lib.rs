//! Core types and constants for questmem
//!
//! This crate contains domain types shared across all other crates.

mod constants;
mod env_config;
mod question;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use question::*;
