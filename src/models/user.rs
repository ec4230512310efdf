// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Optional display name.
    pub name: Option<String>,

    /// Unique email, used as the lookup key at registration and login.
    pub email: String,

    /// Bcrypt password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    /// Optional avatar URL, shown next to the user's comments.
    pub image: Option<String>,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Public view of a user, as returned by the auth endpoints.
/// Carries every user field except the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user (Registration).
/// Email and password are declared optional so the handler can report
/// absent *or empty* values with a single message instead of a
/// deserialization failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// DTO for user login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body for a successful registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user: UserResponse,
    pub message: String,
}

/// Response body for a successful login: the session token plus the
/// user it belongs to.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}
