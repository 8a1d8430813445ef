//! Repository layer — query functions organized by table.
//!
//! Every function is generic over the executor so it runs the same against the
//! pool or inside an open transaction (`&mut *tx`). "All" and "of" queries return
//! rows in insertion order.

pub mod courses;
pub mod enrollments;
pub mod nicknames;
pub mod students;
