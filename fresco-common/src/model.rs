//! Recipe data model
//!
//! Serde types matching the static recipe data document:
//! `{ "recipes": [ { id, name, description, image, category, isPopular, ingredients } ] }`
//!
//! The collection is read-only: loaded once per process lifetime and never
//! written back.

use serde::{Deserialize, Serialize};

/// Top-level shape of the recipe data document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDocument {
    pub recipes: Vec<Recipe>,
}

/// Recipe category, a closed set used for catalog filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl Category {
    /// Wire/attribute value for this category
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Veg => "veg",
            Category::NonVeg => "non-veg",
        }
    }
}

/// A single recipe as loaded from the data document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique lookup key; doubles as the `name` URL parameter on the detail page
    pub id: String,
    pub name: String,
    pub description: String,
    /// Image URL or path
    pub image: String,
    pub category: Category,
    #[serde(rename = "isPopular", default)]
    pub is_popular: bool,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// A recipe ingredient with its per-person baseline quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free text such as "200 g" or "1 (medium)"; absent means "as needed"
    #[serde(default)]
    pub quantity_per_person: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_parses_wire_field_names() {
        let doc: RecipeDocument = serde_json::from_str(
            r#"{
                "recipes": [
                    {
                        "id": "paneer-tikka",
                        "name": "Paneer Tikka",
                        "description": "Chargrilled paneer cubes.",
                        "image": "images/paneer_tikka.jpg",
                        "category": "veg",
                        "isPopular": true,
                        "ingredients": [
                            { "name": "Paneer", "quantity_per_person": "200 g" },
                            { "name": "Salt" }
                        ]
                    }
                ]
            }"#,
        )
        .expect("document should parse");

        assert_eq!(doc.recipes.len(), 1);
        let recipe = &doc.recipes[0];
        assert_eq!(recipe.id, "paneer-tikka");
        assert_eq!(recipe.category, Category::Veg);
        assert!(recipe.is_popular);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(
            recipe.ingredients[0].quantity_per_person.as_deref(),
            Some("200 g")
        );
        assert_eq!(recipe.ingredients[1].quantity_per_person, None);
    }

    #[test]
    fn test_category_round_trip() {
        assert_eq!(
            serde_json::to_string(&Category::NonVeg).unwrap(),
            r#""non-veg""#
        );
        let parsed: Category = serde_json::from_str(r#""non-veg""#).unwrap();
        assert_eq!(parsed, Category::NonVeg);
        assert_eq!(parsed.as_str(), "non-veg");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result = serde_json::from_str::<Category>(r#""vegan""#);
        assert!(result.is_err());
    }
}
