//! fresco-web library - recipe browsing service
//!
//! Serves the Fresco catalog and recipe-detail pages rendered server-side
//! from a static JSON data document, plus a small JSON API over the same
//! collection.

use std::sync::Arc;

use axum::Router;

use crate::repository::RecipeRepository;

pub mod api;
pub mod render;
pub mod repository;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Recipe collection repository (loads once, cached thereafter)
    pub repo: Arc<RecipeRepository>,
}

impl AppState {
    /// Create new application state
    pub fn new(repo: RecipeRepository) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};
    use tower_http::trace::TraceLayer;

    Router::new()
        .route("/", get(api::catalog_page))
        .route("/recipe", get(api::detail_page))
        .route("/order", post(api::place_order))
        .route("/api/recipes", get(api::list_recipes))
        .route("/api/recipes/:id", get(api::get_recipe))
        .route("/static/style.css", get(api::serve_style_css))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
