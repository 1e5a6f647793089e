//! Shared configuration for the cubefield benchmark.
//!
//! # Invariants
//! - Configuration is fixed at startup; nothing mutates it mid-run.
//! - A config that fails validation never reaches the frame loop.

pub mod config;

pub use config::{BenchConfig, ConfigError};
