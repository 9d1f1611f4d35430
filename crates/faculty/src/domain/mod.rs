//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
