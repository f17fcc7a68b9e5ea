//! Battle invariants:
//!
//! 1. A battle needs exactly two staged combatants
//! 2. Scores are deterministic functions of the meal
//! 3. The win edge never leaves [0, 1]
//! 4. After a battle only the winner stays staged

pub mod result;
pub mod scoring;
pub mod staging;

pub use result::BattleResult;
pub use scoring::{battle_score, decide_winner, difficulty_penalty, win_edge, Side};
pub use staging::{CombatantStaging, MAX_COMBATANTS};
