//! Core types and definitions for the RADARSCOPE radar display.
//!
//! This crate defines the vocabulary shared across the other crates:
//! identities, categories, configuration, errors, constants, and the
//! serializable snapshot/report types. It has no dependency on any
//! ECS or host framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
