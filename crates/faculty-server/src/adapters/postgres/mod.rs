//! PostgreSQL Repository Implementations

mod teacher_repository;

pub use teacher_repository::PgTeacherRepository;
