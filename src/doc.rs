// src/doc.rs

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::ErrorBody;
use crate::models::comment::{
    AuthorResponse, CommentCreatedResponse, CommentListResponse, CommentResponse,
    CreateCommentRequest,
};
use crate::models::user::{
    AuthResponse, LoginRequest, RegisterRequest, RegisterResponse, UserResponse,
};

/// Registers the bearer token scheme used by the comment-create endpoint.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API, served as plain JSON.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Quillpost API",
        description = "Registration, login and article comments."
    ),
    paths(
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::comment::list_comments,
        crate::handlers::comment::create_comment,
    ),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        LoginRequest,
        AuthResponse,
        UserResponse,
        CreateCommentRequest,
        CommentResponse,
        CommentListResponse,
        CommentCreatedResponse,
        AuthorResponse,
        ErrorBody,
    )),
    tags(
        (name = "auth", description = "Account registration and login"),
        (name = "comments", description = "Article comments")
    )
)]
pub struct ApiDoc;
