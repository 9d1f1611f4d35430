//! In-process Repository Implementations
//!
//! Transient stores; contents are lost when the process exits.

mod teacher_repository;

pub use teacher_repository::InMemoryTeacherRepository;
