//! Frontend Models
//!
//! Data structures matching the `/foods` REST resource.

use serde::{Deserialize, Serialize};

/// Food item as stored by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Server-assigned identifier, never changed locally
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    /// Image URL
    pub image: String,
}

/// Draft record submitted by the add form (no id, no availability)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

/// POST body: the draft with availability forced on
#[derive(Debug, Serialize)]
pub struct CreateFoodBody<'a> {
    #[serde(flatten)]
    pub food: &'a NewFood,
    pub available: bool,
}

impl<'a> From<&'a NewFood> for CreateFoodBody<'a> {
    fn from(food: &'a NewFood) -> Self {
        Self { food, available: true }
    }
}

/// Partial edit merged over a stored record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

impl FoodPatch {
    /// Patch that only flips availability
    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Default::default()
        }
    }

    /// Merge onto `base`; patch fields win, `id` is kept.
    pub fn apply_to(&self, base: &FoodItem) -> FoodItem {
        FoodItem {
            id: base.id,
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| base.description.clone()),
            price: self.price.unwrap_or(base.price),
            available: self.available.unwrap_or(base.available),
            image: self.image.clone().unwrap_or_else(|| base.image.clone()),
        }
    }
}

/// Display a price with two decimals
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
