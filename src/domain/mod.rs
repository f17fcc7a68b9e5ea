// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod battle;
pub mod leaderboard;
pub mod meal;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Meal Domain
pub use meal::{
    validate_meal, validate_new_meal, validate_price, Difficulty, Meal, MealKey, NewMeal,
};

// Battle Domain
pub use battle::{
    battle_score, decide_winner, difficulty_penalty, win_edge, BattleResult, CombatantStaging,
    Side, MAX_COMBATANTS,
};

// Leaderboard (Derived Data)
pub use leaderboard::{rank, win_percentage, LeaderboardEntry, LeaderboardSort};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid price: {0}. Price must be a positive number.")]
    InvalidPrice(f64),

    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty(String),

    #[error("Invalid sort_by parameter: {0}")]
    InvalidSortKey(String),

    #[error("Invalid result: {0}. Expected 'win' or 'loss'.")]
    InvalidBattleResult(String),

    #[error("Combatant list is full, cannot add more combatants.")]
    CapacityExceeded,

    #[error("Two combatants must be prepped for a battle.")]
    InsufficientCombatants,
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
