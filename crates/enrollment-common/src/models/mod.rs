//! Core domain models shared across the enrollment crates.
//!
//! These are the "truth" types — what the database stores and what callers render.
//! Ids are system-assigned integers, handed out in insertion order.

pub mod course;
pub mod nickname;
pub mod student;

/// Re-export all model types for convenience.
pub use course::*;
pub use nickname::*;
pub use student::*;
