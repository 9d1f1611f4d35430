//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ErrorResponse, MessageResponse, TeacherRequest, TeacherResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::teacher::list_teachers,
        super::teacher::create_teacher,
        super::teacher::get_teacher,
        super::teacher::update_teacher,
        super::teacher::delete_teacher,
    ),
    info(
        title = "Faculty API",
        version = "0.1.0",
        description = "Teacher profile records: name, contact info, bio, subject, availability and image.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Teacher", description = "Teacher profile management"),
    ),
    components(
        schemas(
            TeacherRequest,
            TeacherResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
