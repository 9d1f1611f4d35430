//! In-memory implementation of TeacherRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use faculty::{next_teacher_id, DomainError, Teacher, TeacherDraft, TeacherId, TeacherRepository};

/// In-memory implementation of TeacherRepository.
///
/// The collection is owned by a single `RwLock`; every mutation, including
/// id assignment, completes under one write guard.
#[derive(Default)]
pub struct InMemoryTeacherRepository {
    teachers: RwLock<Vec<Teacher>>,
}

impl InMemoryTeacherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records, kept in the given order
    #[cfg(test)]
    pub fn with_records(teachers: Vec<Teacher>) -> Self {
        Self {
            teachers: RwLock::new(teachers),
        }
    }
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError> {
        Ok(self.teachers.read().await.clone())
    }

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, DomainError> {
        let teachers = self.teachers.read().await;
        Ok(teachers.iter().find(|t| t.id == id).cloned())
    }

    async fn insert(&self, draft: TeacherDraft) -> Result<Teacher, DomainError> {
        let mut teachers = self.teachers.write().await;
        let id = next_teacher_id(teachers.iter().map(|t| t.id));
        let teacher = Teacher::from_draft(id, draft);
        teachers.push(teacher.clone());
        Ok(teacher)
    }

    async fn update(
        &self,
        id: TeacherId,
        draft: TeacherDraft,
    ) -> Result<Option<Teacher>, DomainError> {
        let mut teachers = self.teachers.write().await;
        Ok(teachers.iter_mut().find(|t| t.id == id).map(|teacher| {
            teacher.replace_with(draft);
            teacher.clone()
        }))
    }

    async fn delete(&self, id: TeacherId) -> Result<bool, DomainError> {
        let mut teachers = self.teachers.write().await;
        match teachers.iter().position(|t| t.id == id) {
            Some(index) => {
                teachers.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
