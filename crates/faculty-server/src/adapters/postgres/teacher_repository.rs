//! PostgreSQL implementation of TeacherRepository

use async_trait::async_trait;
use sqlx::PgPool;

use faculty::{DomainError, Teacher, TeacherDraft, TeacherId, TeacherRepository};

const TEACHER_COLUMNS: &str = "id, name, email, phone_number, bio, location, qualification, \
                               availability, subject, image_url";

/// PostgreSQL implementation of TeacherRepository
pub struct PgTeacherRepository {
    pool: PgPool,
}

impl PgTeacherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct TeacherRow {
    id: i64,
    name: String,
    email: String,
    phone_number: String,
    bio: String,
    location: String,
    qualification: String,
    availability: String,
    subject: String,
    image_url: String,
}

impl From<TeacherRow> for Teacher {
    fn from(row: TeacherRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone_number: row.phone_number,
            bio: row.bio,
            location: row.location,
            qualification: row.qualification,
            availability: row.availability,
            subject: row.subject,
            image_url: row.image_url,
        }
    }
}

fn repo_err(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

#[async_trait]
impl TeacherRepository for PgTeacherRepository {
    async fn find_all(&self) -> Result<Vec<Teacher>, DomainError> {
        let rows = sqlx::query_as::<_, TeacherRow>(&format!(
            "SELECT {} FROM teachers ORDER BY seq",
            TEACHER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(repo_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, DomainError> {
        let row = sqlx::query_as::<_, TeacherRow>(&format!(
            "SELECT {} FROM teachers WHERE id = $1",
            TEACHER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repo_err)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, draft: TeacherDraft) -> Result<Teacher, DomainError> {
        let mut tx = self.pool.begin().await.map_err(repo_err)?;

        // Serialize writers so MAX(id) + 1 cannot be computed twice for the same value
        sqlx::query("LOCK TABLE teachers IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(repo_err)?;

        let row = sqlx::query_as::<_, TeacherRow>(&format!(
            r#"
            INSERT INTO teachers ({})
            SELECT COALESCE(MAX(id), 0) + 1, $1, $2, $3, $4, $5, $6, $7, $8, $9
            FROM teachers
            RETURNING {}
            "#,
            TEACHER_COLUMNS, TEACHER_COLUMNS
        ))
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone_number)
        .bind(&draft.bio)
        .bind(&draft.location)
        .bind(&draft.qualification)
        .bind(&draft.availability)
        .bind(&draft.subject)
        .bind(&draft.image_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(repo_err)?;

        tx.commit().await.map_err(repo_err)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: TeacherId,
        draft: TeacherDraft,
    ) -> Result<Option<Teacher>, DomainError> {
        let row = sqlx::query_as::<_, TeacherRow>(&format!(
            r#"
            UPDATE teachers
            SET name = $2, email = $3, phone_number = $4, bio = $5, location = $6,
                qualification = $7, availability = $8, subject = $9, image_url = $10
            WHERE id = $1
            RETURNING {}
            "#,
            TEACHER_COLUMNS
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone_number)
        .bind(&draft.bio)
        .bind(&draft.location)
        .bind(&draft.qualification)
        .bind(&draft.availability)
        .bind(&draft.subject)
        .bind(&draft.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(repo_err)?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: TeacherId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repo_err)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex, MutexGuard};

    // Tests share one `teachers` table
    static DB_LOCK: Mutex<()> = Mutex::new(());

    /// Connects to `DATABASE_URL` and starts from an empty table; `None` when unset.
    async fn test_repo() -> Option<(MutexGuard<'static, ()>, PgTeacherRepository)> {
        let url = std::env::var("DATABASE_URL").ok()?;
        let guard = DB_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let pool = PgPool::connect(&url)
            .await
            .expect("DATABASE_URL is set but the database is unreachable");
        sqlx::migrate!()
            .run(&pool)
            .await
            .expect("Failed to run database migrations");
        sqlx::query("TRUNCATE teachers RESTART IDENTITY")
            .execute(&pool)
            .await
            .expect("Failed to truncate teachers");
        Some((guard, PgTeacherRepository::new(pool)))
    }

    fn named(name: &str) -> TeacherDraft {
        TeacherDraft {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_pg_lifecycle_matches_store_contract() {
        let Some((_guard, repo)) = test_repo().await else {
            eprintln!("DATABASE_URL missing; skip postgres repository test");
            return;
        };

        assert!(repo.find_all().await.unwrap().is_empty());

        for (expected, name) in [(1, "Ann"), (2, "Bo"), (3, "Cy")] {
            assert_eq!(repo.insert(named(name)).await.unwrap().id, expected);
        }

        assert!(repo.delete(3).await.unwrap());
        assert!(!repo.delete(3).await.unwrap());
        assert_eq!(repo.insert(named("Di")).await.unwrap().id, 3);

        let updated = repo
            .update(
                1,
                TeacherDraft {
                    subject: "Physics".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "");
        assert_eq!(updated.subject, "Physics");
        assert_eq!(repo.update(99, named("X")).await.unwrap(), None);

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["", "Bo", "Di"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_pg_concurrent_inserts_get_unique_ids() {
        let Some((_guard, repo)) = test_repo().await else {
            eprintln!("DATABASE_URL missing; skip postgres concurrency test");
            return;
        };
        let repo = Arc::new(repo);

        let mut handles = Vec::new();
        for i in 0..24 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(named(&format!("T{}", i))).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=24).collect::<Vec<i64>>());
        assert_eq!(repo.find_all().await.unwrap().len(), 24);
    }
}
