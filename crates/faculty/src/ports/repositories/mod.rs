//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod teacher_repository;

pub use teacher_repository::*;
