use crate::error::AppError;

/// Bcrypt work factor applied to newly registered passwords.
const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, HASH_COST).map_err(|e| AppError::InternalServerError(e.to_string()))
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, password_hash).map_err(|e| AppError::InternalServerError(e.to_string()))
}
