//! Teacher - Profile request/response DTOs

use faculty::{Teacher, TeacherDraft};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================
// Request/Response DTOs
// ============================================

/// Create or replace Teacher request.
///
/// Missing or `null` fields become empty strings; keys outside the Teacher
/// shape (including `id`) are ignored. Handlers decode it through
/// [`JsonObject`](super::JsonObject) so a JSON array is not bound positionally.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub qualification: Option<String>,
    pub availability: Option<String>,
    pub subject: Option<String>,
    pub image_url: Option<String>,
}

impl From<TeacherRequest> for TeacherDraft {
    fn from(req: TeacherRequest) -> Self {
        Self {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone_number: req.phone_number.unwrap_or_default(),
            bio: req.bio.unwrap_or_default(),
            location: req.location.unwrap_or_default(),
            qualification: req.qualification.unwrap_or_default(),
            availability: req.availability.unwrap_or_default(),
            subject: req.subject.unwrap_or_default(),
            image_url: req.image_url.unwrap_or_default(),
        }
    }
}

/// Teacher response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub bio: String,
    pub location: String,
    pub qualification: String,
    pub availability: String,
    pub subject: String,
    pub image_url: String,
}

impl From<Teacher> for TeacherResponse {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            name: teacher.name,
            email: teacher.email,
            phone_number: teacher.phone_number,
            bio: teacher.bio,
            location: teacher.location,
            qualification: teacher.qualification,
            availability: teacher.availability,
            subject: teacher.subject,
            image_url: teacher.image_url,
        }
    }
}
