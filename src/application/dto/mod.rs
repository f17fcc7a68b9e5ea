// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are output-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::db::DatabaseStats;
use crate::domain::{LeaderboardEntry, Meal};
use crate::services::BattleReport;

// ============================================================================
// MEAL DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDto {
    pub id: i64,
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: String,
    pub battles: u32,
    pub wins: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealDto {
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: String,
}

impl From<Meal> for MealDto {
    fn from(meal: Meal) -> Self {
        Self {
            id: meal.id,
            meal: meal.name,
            cuisine: meal.cuisine,
            price: meal.price,
            difficulty: meal.difficulty.to_string(),
            battles: meal.battles,
            wins: meal.wins,
            created_at: meal.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// LEADERBOARD DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntryDto {
    pub id: i64,
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: String,
    pub battles: u32,
    pub wins: u32,
    pub win_pct: f64,
}

impl From<LeaderboardEntry> for LeaderboardEntryDto {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.id,
            meal: entry.meal,
            cuisine: entry.cuisine,
            price: entry.price,
            difficulty: entry.difficulty.to_string(),
            battles: entry.battles,
            wins: entry.wins,
            win_pct: entry.win_pct,
        }
    }
}

// ============================================================================
// BATTLE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleOutcomeDto {
    pub winner: String,
    pub loser: String,
    pub first_score: f64,
    pub second_score: f64,
    pub edge: f64,
    pub draw: f64,
}

impl From<BattleReport> for BattleOutcomeDto {
    fn from(report: BattleReport) -> Self {
        Self {
            winner: report.winner.name,
            loser: report.loser.name,
            first_score: report.first_score,
            second_score: report.second_score,
            edge: report.edge,
            draw: report.draw,
        }
    }
}

// ============================================================================
// MAINTENANCE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusDto {
    pub status: String,
}

impl StatusDto {
    pub fn ok() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseCheckDto {
    pub integrity: String,
    pub size_bytes: i64,
    pub meal_count: i64,
    pub active_meal_count: i64,
}

impl From<DatabaseStats> for DatabaseCheckDto {
    fn from(stats: DatabaseStats) -> Self {
        Self {
            integrity: "ok".to_string(),
            size_bytes: stats.size_bytes,
            meal_count: stats.meal_count,
            active_meal_count: stats.active_meal_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    #[test]
    fn test_meal_dto_from_meal() {
        let meal = Meal::new(3, "Sushi", "Japanese", 15.0, Difficulty::High);
        let dto = MealDto::from(meal);

        assert_eq!(dto.id, 3);
        assert_eq!(dto.meal, "Sushi");
        assert_eq!(dto.difficulty, "HIGH");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["cuisine"], "Japanese");
    }

    #[test]
    fn test_leaderboard_dto_keeps_rounded_pct() {
        let mut meal = Meal::new(1, "Pizza", "Italian", 10.0, Difficulty::Med);
        meal.battles = 6;
        meal.wins = 4;

        let dto = LeaderboardEntryDto::from(LeaderboardEntry::from_meal(&meal));
        assert_eq!(dto.win_pct, 66.7);
        assert_eq!(dto.difficulty, "MED");
    }
}
