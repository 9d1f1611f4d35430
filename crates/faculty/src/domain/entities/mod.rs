//! Domain Entities
//!
//! - Teacher: Profile record owned by a record store
//! - TeacherDraft: Every field of a Teacher except its identifier

mod teacher;

pub use teacher::*;
