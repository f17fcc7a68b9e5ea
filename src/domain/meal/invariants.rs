use super::entity::{Meal, NewMeal};
use crate::domain::{DomainError, DomainResult};

/// Validates a meal before it is registered
pub fn validate_new_meal(meal: &NewMeal) -> DomainResult<()> {
    validate_text("Meal name", &meal.name)?;
    validate_text("Cuisine", &meal.cuisine)?;
    validate_price(meal.price)?;
    Ok(())
}

/// Validates a stored meal record
pub fn validate_meal(meal: &Meal) -> DomainResult<()> {
    validate_text("Meal name", &meal.name)?;
    validate_text("Cuisine", &meal.cuisine)?;
    validate_price(meal.price)?;
    if meal.wins > meal.battles {
        return Err(DomainError::InvariantViolation(format!(
            "Meal {} has {} wins but only {} battles",
            meal.id, meal.wins, meal.battles
        )));
    }
    Ok(())
}

/// Price must be a finite number greater than zero
pub fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(DomainError::InvalidPrice(price));
    }
    Ok(())
}

fn validate_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Meal invariants:
///
/// 1. Identity (id) is immutable
/// 2. Name and cuisine cannot be empty
/// 3. Price is finite and strictly positive
/// 4. wins <= battles
/// 5. Deleted meals keep their row but cannot battle
