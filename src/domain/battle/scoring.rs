// src/domain/battle/scoring.rs
//
// Pure battle math: no IO, no randomness.

use crate::domain::meal::{Difficulty, Meal};

/// Score scale used to normalize the gap between two combatants
pub const SCORE_GAP_SCALE: f64 = 100.0;

/// Which staged combatant a decision refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Index of this side in the staging area
    pub fn position(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Harder meals are penalized less
pub fn difficulty_penalty(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::High => 1.0,
        Difficulty::Med => 2.0,
        Difficulty::Low => 3.0,
    }
}

/// `price * len(cuisine) - penalty`, unclamped
pub fn battle_score(meal: &Meal) -> f64 {
    let cuisine_len = meal.cuisine.chars().count() as f64;
    meal.price * cuisine_len - difficulty_penalty(meal.difficulty)
}

/// Normalized absolute score gap, clamped to [0, 1]
pub fn win_edge(first_score: f64, second_score: f64) -> f64 {
    ((first_score - second_score) / SCORE_GAP_SCALE)
        .abs()
        .clamp(0.0, 1.0)
}

/// A draw strictly below the edge crowns the first combatant.
/// The edge is unsigned, so this holds whichever side scored higher.
pub fn decide_winner(draw: f64, edge: f64) -> Side {
    if draw < edge {
        Side::First
    } else {
        Side::Second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(price: f64, cuisine: &str, difficulty: Difficulty) -> Meal {
        Meal::new(1, "Test", cuisine, price, difficulty)
    }

    #[test]
    fn test_difficulty_penalties() {
        assert_eq!(difficulty_penalty(Difficulty::High), 1.0);
        assert_eq!(difficulty_penalty(Difficulty::Med), 2.0);
        assert_eq!(difficulty_penalty(Difficulty::Low), 3.0);
    }

    #[test]
    fn test_battle_score_formula() {
        // 10 * 7 - 2
        let score = battle_score(&meal(10.0, "Italian", Difficulty::Med));
        assert!((score - 68.0).abs() < f64::EPSILON);

        // 17.75 * 4 - 1
        let score = battle_score(&meal(17.75, "Thai", Difficulty::High));
        assert!((score - 70.0).abs() < f64::EPSILON);

        // 1 * 1 - 3, no clamping
        let score = battle_score(&meal(1.0, "X", Difficulty::Low));
        assert!((score + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_battle_score_counts_characters() {
        let score = battle_score(&meal(1.0, "Français", Difficulty::High));
        assert!((score - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_win_edge_is_normalized_and_unsigned() {
        assert!((win_edge(70.0, 50.0) - 0.2).abs() < 1e-12);
        assert!((win_edge(50.0, 70.0) - 0.2).abs() < 1e-12);
        assert_eq!(win_edge(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_win_edge_is_clamped() {
        assert_eq!(win_edge(1000.0, 0.0), 1.0);
        assert_eq!(win_edge(0.0, 1000.0), 1.0);
    }

    #[test]
    fn test_decide_winner_threshold() {
        assert_eq!(decide_winner(0.1, 0.2), Side::First);
        assert_eq!(decide_winner(0.5, 0.2), Side::Second);
        // Equality is not a first-combatant win
        assert_eq!(decide_winner(0.2, 0.2), Side::Second);
        // Zero edge always goes to the second combatant
        assert_eq!(decide_winner(0.0, 0.0), Side::Second);
    }

    #[test]
    fn test_side_positions() {
        assert_eq!(Side::First.position(), 0);
        assert_eq!(Side::Second.position(), 1);
        assert_eq!(Side::First.opposite(), Side::Second);
    }
}
