//! Catalog category filtering
//!
//! The filter set is closed: `all`, `veg`, `non-veg`, `popular`. Unknown
//! values parse to `None` and yield an empty result rather than an error.
//! Filtering is exclusion only; the source order of the collection is
//! preserved.

use crate::model::{Category, Recipe};

/// Closed set of catalog filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Veg,
    NonVeg,
    Popular,
}

impl CategoryFilter {
    /// Every filter, in display order
    pub const ALL_FILTERS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Veg,
        CategoryFilter::NonVeg,
        CategoryFilter::Popular,
    ];

    /// Parse a query-string value. Unknown values return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(CategoryFilter::All),
            "veg" => Some(CategoryFilter::Veg),
            "non-veg" => Some(CategoryFilter::NonVeg),
            "popular" => Some(CategoryFilter::Popular),
            _ => None,
        }
    }

    /// Query-string value for this filter
    pub fn query_value(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Veg => "veg",
            CategoryFilter::NonVeg => "non-veg",
            CategoryFilter::Popular => "popular",
        }
    }

    /// Display label for the filter control
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Veg => "Veg",
            CategoryFilter::NonVeg => "Non-Veg",
            CategoryFilter::Popular => "Popular",
        }
    }

    /// Whether `recipe` is included under this filter
    pub fn matches(self, recipe: &Recipe) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Veg => recipe.category == Category::Veg,
            CategoryFilter::NonVeg => recipe.category == Category::NonVeg,
            CategoryFilter::Popular => recipe.is_popular,
        }
    }
}

/// Filter `recipes` under `filter`, preserving source order.
///
/// `filter == None` represents an unknown filter value and returns an empty
/// result (closed set, not an error).
pub fn apply(recipes: &[Recipe], filter: Option<CategoryFilter>) -> Vec<&Recipe> {
    match filter {
        Some(f) => recipes.iter().filter(|r| f.matches(r)).collect(),
        None => Vec::new(),
    }
}
