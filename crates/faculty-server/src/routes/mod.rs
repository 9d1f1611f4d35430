//! Faculty API Routes
//!
//! - /api/teachers - Teacher profile management

pub mod swagger;
pub mod teacher;
