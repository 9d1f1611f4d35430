//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations on top of a record store.

mod teacher_service;

pub use teacher_service::TeacherService;
