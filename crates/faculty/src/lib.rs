//! Faculty Domain Library
//!
//! Core domain types and interfaces for managing Teacher profile records.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and errors
//!   - `entities/`: The `Teacher` record and its `TeacherDraft` body
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Record store interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use faculty::{Teacher, TeacherDraft, TeacherRepository};
//! ```

pub mod domain;
pub mod ports;

pub use domain::{next_teacher_id, DomainError, Teacher, TeacherDraft, TeacherId};
pub use ports::TeacherRepository;
