// src/main.rs

use dotenvy::dotenv;
use quillpost::config::Config;
use quillpost::routes;
use quillpost::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Initialize Database Pool
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("DATABASE_URL is not a valid sqlite URL")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(connect_options)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected...");

    // Run Migrations Automatically
    tracing::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations applied successfully.");

    // Seed Demo Article
    if let Err(e) = seed_demo_article(&pool, &config).await {
        tracing::error!("Failed to seed article: {:?}", e);
    }

    // Create AppState
    let state = AppState {
        pool: pool.clone(),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}

/// Creates the configured article when it does not exist yet.
async fn seed_demo_article(
    pool: &SqlitePool,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(title) = &config.seed_article_title {
        let article_exists =
            sqlx::query_scalar::<_, i64>("SELECT id FROM articles WHERE title = ?1")
                .bind(title)
                .fetch_optional(pool)
                .await?;

        if article_exists.is_none() {
            tracing::info!("Seeding article: {}", title);

            sqlx::query("INSERT INTO articles (title, created_at) VALUES (?1, ?2)")
                .bind(title)
                .bind(chrono::Utc::now())
                .execute(pool)
                .await?;

            tracing::info!("Article created successfully.");
        }
    }
    Ok(())
}
