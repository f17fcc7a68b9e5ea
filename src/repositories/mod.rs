// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - Explicit SQL only

pub mod meal_repository;

pub use meal_repository::{MealRepository, SqliteMealRepository};

#[cfg(test)]
pub use meal_repository::MockMealRepository;
