//! Teacher Application Service (Use Case)
//!
//! Resource operations over any TeacherRepository.

use std::sync::Arc;

use faculty::{DomainError, Teacher, TeacherDraft, TeacherId, TeacherRepository};

const ENTITY: &str = "Teacher";

/// Application service for Teacher operations
pub struct TeacherService<R: TeacherRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: TeacherRepository + ?Sized> TeacherService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Teachers
    pub async fn list_all(&self) -> Result<Vec<Teacher>, DomainError> {
        self.repo.find_all().await
    }

    /// Get a Teacher by ID
    pub async fn get_by_id(&self, id: TeacherId) -> Result<Teacher, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    /// Create a new Teacher; the store assigns the id
    pub async fn create(&self, draft: TeacherDraft) -> Result<Teacher, DomainError> {
        let saved = self.repo.insert(draft).await?;
        tracing::info!("Created Teacher: {} ({})", saved.name, saved.id);
        Ok(saved)
    }

    /// Replace every non-identifier field of an existing Teacher
    pub async fn replace(&self, id: TeacherId, draft: TeacherDraft) -> Result<Teacher, DomainError> {
        let updated = self
            .repo
            .update(id, draft)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;
        tracing::info!("Replaced Teacher: {}", id);
        Ok(updated)
    }

    /// Delete a Teacher
    pub async fn delete(&self, id: TeacherId) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found(ENTITY, id));
        }
        tracing::info!("Deleted Teacher: {}", id);
        Ok(())
    }
}
