use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// DTO for creating a new comment.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Comment must be between 1 and 1000 characters"
    ))]
    pub content: String,
}

/// Flat row produced by joining a comment with its author.
/// Internal shape; the wire format is `CommentResponse`.
#[derive(Debug, FromRow)]
pub struct CommentRow {
    pub id: i64,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub author_id: i64,
    pub author_name: Option<String>,
    pub author_email: String,
    pub author_image: Option<String>,
}

/// Author fields embedded in each comment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// DTO for displaying a comment with author info.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub author: AuthorResponse,
}

impl From<CommentRow> for CommentResponse {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            created_at: row.created_at,
            author: AuthorResponse {
                id: row.author_id,
                name: row.author_name,
                email: Some(row.author_email),
                image: row.author_image,
            },
        }
    }
}

/// Envelope for `GET /api/articles/{id}/comments`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

/// Envelope for `POST /api/articles/{id}/comments`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentCreatedResponse {
    pub comment: CommentResponse,
}
