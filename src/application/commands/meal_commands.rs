// src/application/commands/meal_commands.rs
//
// Meal Command Handlers
//
// RULES:
// - Accept DTOs / raw arguments
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{dto::*, state::AppState};
use crate::domain::{BattleResult, LeaderboardSort};
use crate::error::AppResult;
use crate::services::{CreateMealRequest, MealStatsUpdater};

/// Create a meal and return the stored record
pub fn create_meal(state: &AppState, dto: CreateMealDto) -> AppResult<MealDto> {
    let id = state.meal_service.create_meal(CreateMealRequest {
        name: dto.meal,
        cuisine: dto.cuisine,
        price: dto.price,
        difficulty: dto.difficulty,
    })?;

    let meal = state.meal_service.get_meal_by_id(id)?;
    Ok(MealDto::from(meal))
}

/// Soft-delete a meal
pub fn delete_meal(state: &AppState, meal_id: i64) -> AppResult<StatusDto> {
    state.meal_service.delete_meal(meal_id)?;
    Ok(StatusDto {
        status: format!("Meal with ID {} deleted", meal_id),
    })
}

pub fn get_meal_by_id(state: &AppState, meal_id: i64) -> AppResult<MealDto> {
    let meal = state.meal_service.get_meal_by_id(meal_id)?;
    Ok(MealDto::from(meal))
}

pub fn get_meal_by_name(state: &AppState, name: &str) -> AppResult<MealDto> {
    let meal = state.meal_service.get_meal_by_name(name)?;
    Ok(MealDto::from(meal))
}

/// Record a "win" or "loss" against a meal outside of a battle
pub fn record_result(state: &AppState, meal_id: i64, result: &str) -> AppResult<MealDto> {
    let result: BattleResult = result.parse()?;
    state.meal_service.update_meal_stats(meal_id, result)?;

    let meal = state.meal_service.get_meal_by_id(meal_id)?;
    Ok(MealDto::from(meal))
}

/// Leaderboard sorted by `sort_by` ("wins" or "win_pct")
pub fn get_leaderboard(state: &AppState, sort_by: &str) -> AppResult<Vec<LeaderboardEntryDto>> {
    let sort: LeaderboardSort = sort_by.parse()?;
    let entries = state.meal_service.get_leaderboard(sort)?;

    Ok(entries.into_iter().map(LeaderboardEntryDto::from).collect())
}

/// Drop every meal
pub fn clear_meals(state: &AppState) -> AppResult<StatusDto> {
    state.meal_service.clear_catalog()?;
    Ok(StatusDto {
        status: "Meals cleared".to_string(),
    })
}
