// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Session token lifetime in seconds.
    pub jwt_expiration: u64,
    pub rust_log: String,
    /// When set, an article with this title is created at startup if none
    /// exists, so a fresh database has something to comment on.
    pub seed_article_title: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86400);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let seed_article_title = env::var("SEED_ARTICLE_TITLE").ok();

        Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            rust_log,
            seed_article_title,
        }
    }
}
