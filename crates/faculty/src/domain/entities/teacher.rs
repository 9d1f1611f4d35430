//! Teacher - Profile record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Identifier of a Teacher record, assigned by the store.
pub type TeacherId = i64;

/// Teacher profile as held by a record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
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

/// Every field of a Teacher except its identifier.
///
/// Creates and full replaces both carry a draft, so a caller can never
/// choose or change an identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherDraft {
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

impl Teacher {
    /// Build a stored record from a draft and a store-assigned id
    pub fn from_draft(id: TeacherId, draft: TeacherDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone_number: draft.phone_number,
            bio: draft.bio,
            location: draft.location,
            qualification: draft.qualification,
            availability: draft.availability,
            subject: draft.subject,
            image_url: draft.image_url,
        }
    }

    /// Overwrite every non-identifier field with the draft. No merge.
    pub fn replace_with(&mut self, draft: TeacherDraft) {
        *self = Self::from_draft(self.id, draft);
    }

    /// Copy of the non-identifier fields
    pub fn to_draft(&self) -> TeacherDraft {
        TeacherDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            qualification: self.qualification.clone(),
            availability: self.availability.clone(),
            subject: self.subject.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Next identifier for a collection: one past the largest live id, or 1 when empty.
///
/// Recomputed from the live set on every insert, so removing the record with
/// the highest id frees that id for the next insert.
pub fn next_teacher_id<I>(live_ids: I) -> TeacherId
where
    I: IntoIterator<Item = TeacherId>,
{
    live_ids.into_iter().max().map_or(1, |max| max + 1)
}
