// src/routes.rs

use axum::{
    Json, Router,
    http::Method,
    middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    doc::ApiDoc,
    handlers::{auth, comment},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Serves the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, articles, docs).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let article_routes = Router::new()
        .route("/{id}/comments", get(comment::list_comments))
        // Protected comment routes
        .merge(
            Router::new()
                .route("/{id}/comments", post(comment::create_comment))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/articles", article_routes)
        .route("/api-docs/openapi.json", get(openapi_json))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
