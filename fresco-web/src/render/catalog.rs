//! Catalog (home) page rendering
//!
//! Category filter controls plus the recipe cards matching the active
//! filter, in source order. Exactly one filter control is marked active.

use fresco_common::filter::{self, CategoryFilter};
use fresco_common::model::Recipe;

use super::{escape_html, page};

/// Placeholder shown when the filtered result is empty
const NO_RESULTS: &str = "<p class=\"no-results\">No recipes found in this category.</p>\n";

/// Render the catalog page.
///
/// `filter == None` represents an unknown category value from the query
/// string and renders the no-results placeholder with no control active.
pub fn render(recipes: &[Recipe], filter: Option<CategoryFilter>) -> String {
    let mut body = String::new();
    body.push_str("<header class=\"site-header\"><h1>Fresco</h1></header>\n");
    body.push_str(&render_filter_bar(filter));

    body.push_str("<main class=\"item-list\">\n");
    let visible = filter::apply(recipes, filter);
    if visible.is_empty() {
        body.push_str(NO_RESULTS);
    } else {
        for recipe in visible {
            body.push_str(&render_card(recipe));
        }
    }
    body.push_str("</main>\n");

    page("Fresco - Recipes", &body)
}

fn render_filter_bar(active: Option<CategoryFilter>) -> String {
    let mut bar = String::from("<nav class=\"category-bar\">\n");
    for f in CategoryFilter::ALL_FILTERS {
        let class = if active == Some(f) {
            "category-btn active"
        } else {
            "category-btn"
        };
        bar.push_str(&format!(
            "<a class=\"{}\" href=\"/?category={}\">{}</a>\n",
            class,
            f.query_value(),
            f.label()
        ));
    }
    bar.push_str("</nav>\n");
    bar
}

fn render_card(recipe: &Recipe) -> String {
    format!(
        "<div class=\"food-item\" data-category=\"{}\">\n\
         <img src=\"{}\" alt=\"{}\">\n\
         <h3>{}</h3>\n\
         <p class=\"description\">{}</p>\n\
         <div class=\"item-actions\">\
         <a class=\"btn view-details\" href=\"/recipe?name={}\">View Recipe</a>\
         </div>\n\
         </div>\n",
        recipe.category.as_str(),
        escape_html(&recipe.image),
        escape_html(&recipe.name),
        escape_html(&recipe.name),
        escape_html(&recipe.description),
        escape_html(&recipe.id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_common::model::Category;

    fn recipe(id: &str, name: &str, category: Category, is_popular: bool) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            image: format!("images/{}.jpg", id),
            category,
            is_popular,
            ingredients: Vec::new(),
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("paneer-tikka", "Paneer Tikka", Category::Veg, true),
            recipe("chicken-curry", "Chicken Curry", Category::NonVeg, false),
        ]
    }

    #[test]
    fn test_all_filter_lists_every_recipe() {
        let html = render(&sample(), Some(CategoryFilter::All));
        assert!(html.contains("Paneer Tikka"));
        assert!(html.contains("Chicken Curry"));
        assert!(html.contains("href=\"/recipe?name=paneer-tikka\""));
        assert!(!html.contains("No recipes found"));
    }

    #[test]
    fn test_category_filter_excludes_non_matching() {
        let html = render(&sample(), Some(CategoryFilter::Veg));
        assert!(html.contains("Paneer Tikka"));
        assert!(!html.contains("Chicken Curry"));
    }

    #[test]
    fn test_exactly_one_filter_control_active() {
        let html = render(&sample(), Some(CategoryFilter::Popular));
        assert_eq!(html.matches("category-btn active").count(), 1);
        assert!(html.contains("class=\"category-btn active\" href=\"/?category=popular\""));
    }

    #[test]
    fn test_empty_result_shows_placeholder() {
        let html = render(&sample(), None);
        assert!(html.contains("No recipes found in this category."));
        assert!(!html.contains("food-item"));
    }

    #[test]
    fn test_data_is_escaped() {
        let mut spicy = sample();
        spicy[0].name = "<script>alert(1)</script>".to_string();
        let html = render(&spicy, Some(CategoryFilter::All));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
