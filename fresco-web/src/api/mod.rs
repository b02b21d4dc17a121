//! HTTP API handlers for fresco-web

pub mod assets;
pub mod health;
pub mod pages;
pub mod recipes;

pub use assets::serve_style_css;
pub use health::health_routes;
pub use pages::{catalog_page, detail_page, place_order};
pub use recipes::{get_recipe, list_recipes};

/// Cap applied to the servings parameter so a crafted query cannot request
/// absurd quantities; the page selector itself only offers 1-6.
const MAX_PERSONS: i64 = 100;

/// Clamp a requested servings count into the supported range (at least 1)
pub(crate) fn clamp_persons(requested: i64) -> u32 {
    requested.clamp(1, MAX_PERSONS) as u32
}

#[cfg(test)]
mod tests {
    use super::clamp_persons;

    #[test]
    fn test_clamp_persons() {
        assert_eq!(clamp_persons(-3), 1);
        assert_eq!(clamp_persons(0), 1);
        assert_eq!(clamp_persons(1), 1);
        assert_eq!(clamp_persons(4), 4);
        assert_eq!(clamp_persons(10_000), 100);
    }
}
