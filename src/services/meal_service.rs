// src/services/meal_service.rs
//
// Meal catalog ("kitchen") - creation, lookup, soft delete, stats, leaderboard

use log::{error, info, warn};
use std::sync::Arc;

use crate::domain::{
    rank, validate_meal, validate_new_meal, validate_price, BattleResult, Difficulty,
    LeaderboardEntry, LeaderboardSort, Meal, MealKey, NewMeal,
};
use crate::error::{AppError, AppResult};
use crate::repositories::MealRepository;
use crate::services::battle_service::MealStatsUpdater;

#[derive(Debug, Clone)]
pub struct CreateMealRequest {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    /// Raw difficulty label, validated on creation
    pub difficulty: String,
}

pub struct MealService {
    meal_repo: Arc<dyn MealRepository>,
}

impl MealService {
    pub fn new(meal_repo: Arc<dyn MealRepository>) -> Self {
        Self { meal_repo }
    }

    pub fn create_meal(&self, request: CreateMealRequest) -> AppResult<i64> {
        validate_price(request.price).map_err(AppError::Domain)?;
        let difficulty: Difficulty = request.difficulty.parse().map_err(AppError::Domain)?;

        let meal = NewMeal {
            name: request.name,
            cuisine: request.cuisine,
            price: request.price,
            difficulty,
        };
        validate_new_meal(&meal).map_err(AppError::Domain)?;

        let id = self.meal_repo.create(&meal).map_err(|e| {
            error!("Failed to create meal '{}': {}", meal.name, e);
            e
        })?;

        info!("Meal successfully added to the database: {}", meal.name);
        Ok(id)
    }

    /// Soft-delete a meal. Unknown and already deleted ids are errors.
    pub fn delete_meal(&self, meal_id: i64) -> AppResult<()> {
        let key = MealKey::Id(meal_id);
        let meal = self.meal_repo.get_by_id(meal_id)?.ok_or_else(|| {
            info!("Meal with ID {} not found", meal_id);
            AppError::RecordNotFound(key.clone())
        })?;

        if meal.deleted {
            info!("Meal with ID {} has already been deleted", meal_id);
            return Err(AppError::RecordDeleted(key));
        }

        self.meal_repo.mark_deleted(meal_id)?;
        info!("Meal with ID {} marked as deleted.", meal_id);
        Ok(())
    }

    pub fn get_meal_by_id(&self, meal_id: i64) -> AppResult<Meal> {
        let meal = self.meal_repo.get_by_id(meal_id)?;
        Self::require_active(meal, MealKey::Id(meal_id))
    }

    pub fn get_meal_by_name(&self, name: &str) -> AppResult<Meal> {
        let meal = self.meal_repo.get_by_name(name)?;
        Self::require_active(meal, MealKey::Name(name.to_string()))
    }

    /// Active meals that have fought, ranked descending by `sort_by`
    pub fn get_leaderboard(&self, sort_by: LeaderboardSort) -> AppResult<Vec<LeaderboardEntry>> {
        let entries = self
            .meal_repo
            .list_with_battles()?
            .iter()
            .map(LeaderboardEntry::from_meal)
            .collect();

        let leaderboard = rank(entries, sort_by);
        info!(
            "Leaderboard retrieved with {} meal(s), sorted by {}",
            leaderboard.len(),
            sort_by
        );
        Ok(leaderboard)
    }

    /// Administrative reset: every meal is dropped
    pub fn clear_catalog(&self) -> AppResult<()> {
        self.meal_repo.reset()?;
        warn!("Meal catalog cleared");
        Ok(())
    }

    fn require_active(meal: Option<Meal>, key: MealKey) -> AppResult<Meal> {
        let meal = meal.ok_or_else(|| {
            info!("Meal with {} not found", key);
            AppError::RecordNotFound(key.clone())
        })?;

        if meal.deleted {
            info!("Meal with {} marked as deleted", key);
            return Err(AppError::RecordDeleted(key));
        }

        validate_meal(&meal).map_err(AppError::Domain)?;
        Ok(meal)
    }
}

impl MealStatsUpdater for MealService {
    fn update_meal_stats(&self, meal_id: i64, result: BattleResult) -> AppResult<()> {
        let meal = self.meal_repo.get_by_id(meal_id)?;
        Self::require_active(meal, MealKey::Id(meal_id))?;

        self.meal_repo.increment_stats(meal_id, result)?;
        info!("Recorded {} for meal ID {}", result, meal_id);
        Ok(())
    }
}
