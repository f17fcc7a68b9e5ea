pub mod entity;
pub mod invariants;

pub use entity::{Difficulty, Meal, MealKey, NewMeal};
pub use invariants::{validate_meal, validate_new_meal, validate_price};
