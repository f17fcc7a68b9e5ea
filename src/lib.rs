// src/lib.rs
// Meal Max - meal roster and battle simulator
//
// Architecture:
// - Domain-centric: scoring, staging and leaderboard rules live in `domain`
// - Explicit: collaborators are injected as trait objects
// - Persistence: SQLite through an r2d2 pool
// - Application Layer: CLI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_meal,
    validate_new_meal,
    BattleResult,
    CombatantStaging,
    Difficulty,
    DomainError,
    LeaderboardEntry,
    LeaderboardSort,
    Meal,
    MealKey,
    NewMeal,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use integrations::{RandomError, RandomOrgClient, RandomSource};
pub use repositories::{MealRepository, SqliteMealRepository};
pub use services::{BattleReport, BattleService, CreateMealRequest, MealService, MealStatsUpdater};
