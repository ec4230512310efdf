// src/handlers/comment.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::comment::{
        CommentCreatedResponse, CommentListResponse, CommentResponse, CommentRow,
        CreateCommentRequest,
    },
    utils::jwt::Claims,
};

/// List all comments for an article, newest first.
///
/// Public endpoint. An unknown article id yields an empty list rather
/// than a 404, so a page can render before its article is seeded.
#[utoipa::path(
    get,
    path = "/api/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Comments for the article", body = CommentListResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tags = ["comments"],
    operation_id = "listComments"
)]
pub async fn list_comments(
    State(pool): State<SqlitePool>,
    Path(article_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let rows = sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT
            c.id, c.content, c.created_at,
            u.id AS author_id, u.name AS author_name,
            u.email AS author_email, u.image AS author_image
        FROM comments c
        JOIN users u ON c.user_id = u.id
        WHERE c.article_id = ?1
        ORDER BY c.created_at DESC, c.id DESC
        "#,
    )
    .bind(article_id)
    .fetch_all(&pool)
    .await?;

    let comments: Vec<CommentResponse> = rows.into_iter().map(CommentResponse::from).collect();

    Ok(Json(CommentListResponse { comments }))
}

/// Create a new comment on an article.
///
/// Requires authentication. Inserts the comment and bumps the article's
/// comment counter in a single transaction, then returns the stored
/// comment joined with its author.
#[utoipa::path(
    post,
    path = "/api/articles/{id}/comments",
    params(("id" = i64, Path, description = "Article id")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentCreatedResponse),
        (status = 400, description = "Invalid content", body = crate::error::ErrorBody),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Unknown article", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    tags = ["comments"],
    operation_id = "createComment",
    security(("BearerToken" = []))
)]
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(article_id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Whitespace-only content passes the length bounds but is still empty
    // once trimmed, so it gets the same rejection.
    if payload.validate().is_err() || payload.content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Comment must be between 1 and 1000 characters".to_string(),
        ));
    }

    let user_id = claims.sub.parse::<i64>().unwrap_or(0);

    let mut tx = pool.begin().await?;

    sqlx::query_scalar::<_, i64>("SELECT id FROM articles WHERE id = ?1")
        .bind(article_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::NotFound("Article not found".to_string()))?;

    let new_id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO comments (article_id, user_id, content, created_at)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id
        "#,
    )
    .bind(article_id)
    .bind(user_id)
    .bind(&payload.content)
    .bind(chrono::Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE articles SET comments_count = comments_count + 1 WHERE id = ?1")
        .bind(article_id)
        .execute(&mut *tx)
        .await?;

    let row = sqlx::query_as::<_, CommentRow>(
        r#"
        SELECT
            c.id, c.content, c.created_at,
            u.id AS author_id, u.name AS author_name,
            u.email AS author_email, u.image AS author_image
        FROM comments c
        JOIN users u ON c.user_id = u.id
        WHERE c.id = ?1
        "#,
    )
    .bind(new_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedResponse {
            comment: row.into(),
        }),
    ))
}
