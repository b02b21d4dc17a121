//! Page handlers: catalog, recipe detail, purchase stub
//!
//! Thin adapters applying the pure render functions to HTTP responses.
//! View state (category filter, recipe id, servings count) round-trips
//! through query parameters, so every response is a complete page rendered
//! from the source collection.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use fresco_common::filter::CategoryFilter;

use crate::api::clamp_persons;
use crate::render;
use crate::AppState;

/// Query parameters for the catalog page
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

/// GET /
///
/// Catalog page. `?category=` selects the filter (default `all`); unknown
/// values render the no-results placeholder rather than an error.
pub async fn catalog_page(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    let filter = match query.category.as_deref() {
        None => Some(CategoryFilter::All),
        Some(value) => CategoryFilter::parse(value),
    };
    let recipes = state.repo.get_recipes().await;
    Html(render::catalog::render(&recipes, filter))
}

/// Query parameters for the detail page
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    /// Recipe id; the parameter key is `name` for compatibility with the
    /// original site's links
    pub name: Option<String>,
    #[serde(default = "default_persons")]
    pub persons: i64,
}

fn default_persons() -> i64 {
    1
}

/// GET /recipe
///
/// Recipe detail page. A missing `name` parameter or an unknown id renders
/// the NotFound state; out-of-range servings counts are clamped.
pub async fn detail_page(
    State(state): State<AppState>,
    Query(query): Query<DetailQuery>,
) -> Html<String> {
    let persons = clamp_persons(query.persons);
    let recipe = match query.name.as_deref() {
        Some(id) => state.repo.find_by_id(id).await,
        None => None,
    };
    Html(render::detail::render(recipe.as_ref(), persons))
}

/// Form body for the purchase stub
#[derive(Debug, Deserialize)]
pub struct OrderForm {
    pub name: String,
    #[serde(default = "default_persons")]
    pub persons: i64,
}

/// POST /order
///
/// Purchase stub: acknowledges the order naming the recipe and servings
/// count. Performs no persistence or transaction.
pub async fn place_order(
    State(state): State<AppState>,
    Form(form): Form<OrderForm>,
) -> Html<String> {
    let persons = clamp_persons(form.persons);
    match state.repo.find_by_id(&form.name).await {
        Some(recipe) => Html(render::order_acknowledgment(&recipe.name, persons)),
        None => Html(render::detail::render(None, persons)),
    }
}
