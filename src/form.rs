//! Food Form Values
//!
//! Raw input of the add/edit modals and its validation.

use crate::error::FormError;
use crate::models::{FoodItem, FoodPatch, NewFood};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl FoodForm {
    /// Prefill for the edit modal
    pub fn from_item(food: &FoodItem) -> Self {
        Self {
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price.to_string(),
            image: food.image.clone(),
        }
    }

    pub fn to_new_food(&self) -> Result<NewFood, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        Ok(NewFood {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price: parse_price(&self.price)?,
            image: self.image.trim().to_string(),
        })
    }

    /// Edit modal submits every field, so every field is set.
    pub fn to_patch(&self) -> Result<FoodPatch, FormError> {
        let food = self.to_new_food()?;
        Ok(FoodPatch {
            name: Some(food.name),
            description: Some(food.description),
            price: Some(food.price),
            image: Some(food.image),
            available: None,
        })
    }
}

/// Accepts `10`, `10.5` and `10,5`.
fn parse_price(raw: &str) -> Result<f64, FormError> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(FormError::InvalidPrice(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::tests::food;

    fn form(name: &str, price: &str) -> FoodForm {
        FoodForm {
            name: name.to_string(),
            description: " d ".to_string(),
            price: price.to_string(),
            image: "x".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        let draft = form(" Pie ", "10").to_new_food().unwrap();
        assert_eq!(draft.name, "Pie");
        assert_eq!(draft.description, "d");
        assert_eq!(draft.price, 10.0);
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(form("Pie", "10,5").to_new_food().unwrap().price, 10.5);
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(form("  ", "10").to_new_food(), Err(FormError::EmptyName));
    }

    #[test]
    fn test_rejects_bad_prices() {
        for bad in ["", "abc", "-1", "NaN", "inf"] {
            assert!(
                matches!(form("Pie", bad).to_new_food(), Err(FormError::InvalidPrice(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_patch_reports_validation_error() {
        assert_eq!(form("", "7").to_patch(), Err(FormError::EmptyName));
        assert_eq!(
            form("Cake", "seven").to_patch(),
            Err(FormError::InvalidPrice("seven".to_string()))
        );
    }

    #[test]
    fn test_prefill_then_patch_keeps_availability() {
        let mut cake = food(1, "Cake", 5.0);
        cake.available = false;
        let mut values = FoodForm::from_item(&cake);
        values.price = "7".to_string();

        let merged = values.to_patch().unwrap().apply_to(&cake);

        assert_eq!(merged.id, 1);
        assert_eq!(merged.name, "Cake");
        assert_eq!(merged.price, 7.0);
        assert!(!merged.available);
    }
}
