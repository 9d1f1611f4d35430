//! Teacher Repository Port
//!
//! Abstract interface for the record store owning all Teacher records.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Teacher, TeacherDraft, TeacherId};

/// Record store for Teacher entities.
///
/// Implementations assign identifiers on insert as one past the largest
/// live id (1 when empty), and must keep that assignment atomic with the
/// insert under concurrent callers.
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// All live records in insertion order
    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError>;

    /// Find a Teacher by ID
    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, DomainError>;

    /// Store a new record under a freshly assigned id
    async fn insert(&self, draft: TeacherDraft) -> Result<Teacher, DomainError>;

    /// Replace every non-identifier field. `None` if the id is absent.
    async fn update(
        &self,
        id: TeacherId,
        draft: TeacherDraft,
    ) -> Result<Option<Teacher>, DomainError>;

    /// Delete a Teacher by ID. `false` if the id is absent.
    async fn delete(&self, id: TeacherId) -> Result<bool, DomainError>;
}
