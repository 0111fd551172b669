//! Shared value objects and configuration used across the kennel workspace.
//!
//! * [`sex::Sex`]: the two-valued sex of a dog.
//! * [`config::Config`]: runtime options handed from the CLI to the core.

pub mod config;
pub mod sex;
