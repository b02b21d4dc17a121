//! # Fresco Common Library
//!
//! Shared code for the Fresco recipe service including:
//! - Recipe data model (serde types for the static JSON document)
//! - Ingredient quantity scaling
//! - Catalog category filtering
//! - Error types
//! - Data-file path resolution

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod scaling;

pub use error::{Error, Result};
pub use filter::CategoryFilter;
pub use model::{Category, Ingredient, Recipe, RecipeDocument};
