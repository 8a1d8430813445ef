//! # enrollment-common
//!
//! Shared types, configuration, error handling, and payload validation used by the
//! enrollment crates. No storage access lives here, just the domain primitives and contracts.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;
