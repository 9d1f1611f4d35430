//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with record stores.
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod repositories;

pub use repositories::*;
