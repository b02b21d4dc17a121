//! Recipe detail page rendering
//!
//! Two terminal states, decided at render time:
//! - Found: title, image, description, ingredient list scaled to the
//!   selected servings count, servings selector, buy control.
//! - NotFound: fixed error copy with the ingredient list and purchase
//!   controls suppressed. No further interaction is offered.
//!
//! A servings change arrives as a fresh request, so the ingredient list is
//! always recomputed from the per-person baselines in the source collection;
//! an already-scaled value is never re-scaled.

use fresco_common::model::Recipe;
use fresco_common::scaling::display_quantity;

use super::{escape_html, page};

/// Upper bound offered by the servings selector
const MAX_SELECTABLE_PERSONS: u32 = 6;

/// Image shown on the NotFound page
const PLACEHOLDER_ERROR_IMAGE: &str = "images/placeholder_error.jpg";

/// Render the detail page for `recipe` at `persons` servings.
///
/// `recipe == None` covers both a missing `name` parameter and an unknown
/// id; both reach the same NotFound state.
pub fn render(recipe: Option<&Recipe>, persons: u32) -> String {
    match recipe {
        Some(recipe) => render_found(recipe, persons),
        None => render_not_found(),
    }
}

fn render_found(recipe: &Recipe, persons: u32) -> String {
    let body = format!(
        "<main class=\"recipe-detail\">\n\
         <img id=\"recipe-image\" src=\"{image}\" alt=\"{name}\">\n\
         <h1 id=\"recipe-title\">{name}</h1>\n\
         <p id=\"recipe-description\">{description}</p>\n\
         <section class=\"ingredients-list\">\n\
         <h2>Ingredients <span class=\"persons-label\">for {persons} people</span></h2>\n\
         <ul id=\"ingredients-container\">\n{ingredients}</ul>\n\
         </section>\n\
         <section class=\"recipe-actions\">\n\
         {selector}\
         {buy}\
         </section>\n\
         </main>\n",
        image = escape_html(&recipe.image),
        name = escape_html(&recipe.name),
        description = escape_html(&recipe.description),
        persons = persons,
        ingredients = render_ingredients(recipe, persons),
        selector = render_persons_selector(&recipe.id, persons),
        buy = render_buy_form(&recipe.id, persons),
    );
    page(&format!("Fresco - {}", recipe.name), &body)
}

/// One `<li>` per ingredient, scaled from the per-person baseline
fn render_ingredients(recipe: &Recipe, persons: u32) -> String {
    let mut out = String::new();
    for ingredient in &recipe.ingredients {
        let quantity = display_quantity(ingredient.quantity_per_person.as_deref(), persons);
        out.push_str(&format!(
            "<li>{}: {}</li>\n",
            escape_html(&ingredient.name),
            escape_html(&quantity)
        ));
    }
    out
}

/// Servings selector: a GET form that re-requests the page, so the whole
/// ingredient list is re-rendered from the source quantities
fn render_persons_selector(id: &str, persons: u32) -> String {
    let mut options = String::new();
    for n in 1..=MAX_SELECTABLE_PERSONS {
        let selected = if n == persons { " selected" } else { "" };
        options.push_str(&format!("<option value=\"{n}\"{selected}>{n}</option>\n"));
    }
    format!(
        "<form class=\"persons-form\" method=\"get\" action=\"/recipe\">\n\
         <input type=\"hidden\" name=\"name\" value=\"{id}\">\n\
         <label for=\"persons\">Persons:</label>\n\
         <select id=\"persons\" name=\"persons\">\n{options}</select>\n\
         <button type=\"submit\" class=\"btn\">Update</button>\n\
         </form>\n",
        id = escape_html(id),
        options = options,
    )
}

fn render_buy_form(id: &str, persons: u32) -> String {
    format!(
        "<form class=\"buy-form\" method=\"post\" action=\"/order\">\n\
         <input type=\"hidden\" name=\"name\" value=\"{id}\">\n\
         <input type=\"hidden\" name=\"persons\" value=\"{persons}\">\n\
         <button type=\"submit\" class=\"btn buy-now\">Buy Now</button>\n\
         </form>\n",
        id = escape_html(id),
        persons = persons,
    )
}

fn render_not_found() -> String {
    let body = format!(
        "<main class=\"recipe-detail\">\n\
         <img id=\"recipe-image\" src=\"{image}\" alt=\"Recipe Not Found\">\n\
         <h1 id=\"recipe-title\">Recipe Not Found</h1>\n\
         <p id=\"recipe-description\">The selected recipe could not be found. \
         Please return to the home page.</p>\n\
         <p><a class=\"btn\" href=\"/\">Back to recipes</a></p>\n\
         </main>\n",
        image = PLACEHOLDER_ERROR_IMAGE,
    );
    page("Fresco - Recipe Not Found", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_common::model::{Category, Ingredient};

    fn sample() -> Recipe {
        Recipe {
            id: "paneer-tikka".to_string(),
            name: "Paneer Tikka".to_string(),
            description: "Chargrilled paneer cubes.".to_string(),
            image: "images/paneer_tikka.jpg".to_string(),
            category: Category::Veg,
            is_popular: true,
            ingredients: vec![
                Ingredient {
                    name: "Paneer".to_string(),
                    quantity_per_person: Some("200 g".to_string()),
                },
                Ingredient {
                    name: "Capsicum".to_string(),
                    quantity_per_person: Some("1 (medium)".to_string()),
                },
                Ingredient {
                    name: "Salt".to_string(),
                    quantity_per_person: None,
                },
            ],
        }
    }

    #[test]
    fn test_found_renders_baseline_quantities() {
        let html = render(Some(&sample()), 1);
        assert!(html.contains("<h1 id=\"recipe-title\">Paneer Tikka</h1>"));
        assert!(html.contains("alt=\"Paneer Tikka\""));
        assert!(html.contains("Paneer: 200 g"));
        assert!(html.contains("Capsicum: 1 (medium)"));
        assert!(html.contains("Salt: As needed"));
        assert!(html.contains("for 1 people"));
    }

    #[test]
    fn test_found_rescales_from_source_quantities() {
        let html = render(Some(&sample()), 3);
        assert!(html.contains("Paneer: 600 g"));
        assert!(html.contains("Capsicum: 3 (medium per serving)"));
        // Missing quantity is never scaled
        assert!(html.contains("Salt: As needed"));
        assert!(html.contains("for 3 people"));
    }

    #[test]
    fn test_selector_marks_current_persons() {
        let html = render(Some(&sample()), 4);
        assert!(html.contains("<option value=\"4\" selected>4</option>"));
        assert_eq!(html.matches(" selected>").count(), 1);
    }

    #[test]
    fn test_not_found_state() {
        let html = render(None, 1);
        assert!(html.contains("Recipe Not Found"));
        assert!(html.contains("The selected recipe could not be found."));
        assert!(html.contains(PLACEHOLDER_ERROR_IMAGE));
        // Ingredient list and purchase controls are suppressed
        assert!(!html.contains("ingredients-container"));
        assert!(!html.contains("Buy Now"));
        assert!(!html.contains("persons-form"));
    }
}
