//! Faculty API Data Models
//!
//! - Teacher: request/response bodies for the Teacher resource
//! - Common response envelopes (message, error)

mod common;
mod teacher;

pub use common::*;
pub use teacher::*;
