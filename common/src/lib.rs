//! # Herocraft Common
//!
//! Shared models for the character forge: the closed set of character kinds,
//! the upgrades that can be stacked onto them, the plain [`hero::Character`]
//! value both core operations exchange, and the run configuration.

pub mod config;
pub mod hero;
pub mod log;

pub use tracing;
