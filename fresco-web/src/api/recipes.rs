//! JSON API over the recipe collection
//!
//! Mirrors the page behavior: the listing applies the same category
//! filtering as the catalog, detail responses carry ingredients scaled to
//! the requested servings count.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use fresco_common::filter::{self, CategoryFilter};
use fresco_common::model::{Category, Recipe};
use fresco_common::scaling::display_quantity;

use crate::api::clamp_persons;
use crate::AppState;

/// Query parameters for the recipe listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// Catalog listing entry (ingredients omitted)
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: Category,
    #[serde(rename = "isPopular")]
    pub is_popular: bool,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            image: recipe.image.clone(),
            category: recipe.category,
            is_popular: recipe.is_popular,
        }
    }
}

/// Listing response with the applied filter echoed back
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub category: String,
    pub total: usize,
    pub recipes: Vec<RecipeSummary>,
}

/// GET /api/recipes
///
/// Recipe listing with the same `?category=` filtering as the catalog page.
/// Unknown category values yield an empty listing, not an error.
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse> {
    let category = query.category.unwrap_or_else(|| "all".to_string());
    let filter = CategoryFilter::parse(&category);

    let recipes = state.repo.get_recipes().await;
    let visible = filter::apply(&recipes, filter);

    Json(ListResponse {
        category,
        total: visible.len(),
        recipes: visible.into_iter().map(RecipeSummary::from).collect(),
    })
}

/// Query parameters for the recipe detail endpoint
#[derive(Debug, Deserialize)]
pub struct RecipeQuery {
    #[serde(default = "default_persons")]
    pub persons: i64,
}

fn default_persons() -> i64 {
    1
}

/// An ingredient with its quantity scaled for display
#[derive(Debug, Serialize)]
pub struct ScaledIngredient {
    pub name: String,
    pub quantity: String,
}

/// Detail response with ingredients scaled to `persons`
#[derive(Debug, Serialize)]
pub struct RecipeDetailResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub persons: u32,
    pub ingredients: Vec<ScaledIngredient>,
}

/// GET /api/recipes/:id
///
/// Single recipe with ingredients scaled by `?persons=` (default 1,
/// clamped to at least 1). Unknown ids return a 404 JSON error.
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RecipeQuery>,
) -> Result<Json<RecipeDetailResponse>, ApiError> {
    let persons = clamp_persons(query.persons);
    let recipe = state
        .repo
        .find_by_id(&id)
        .await
        .ok_or(ApiError::RecipeNotFound(id))?;

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| ScaledIngredient {
            name: ingredient.name.clone(),
            quantity: display_quantity(ingredient.quantity_per_person.as_deref(), persons),
        })
        .collect();

    Ok(Json(RecipeDetailResponse {
        id: recipe.id,
        name: recipe.name,
        description: recipe.description,
        image: recipe.image,
        persons,
        ingredients,
    }))
}

/// JSON API errors
#[derive(Debug)]
pub enum ApiError {
    RecipeNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::RecipeNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Recipe not found: {}", id))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
