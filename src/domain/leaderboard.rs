// src/domain/leaderboard.rs
//
// Leaderboard entries
//
// Entries are derived from meal records; they are never stored.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::meal::{Difficulty, Meal};
use crate::domain::DomainError;

/// Key the leaderboard is ordered by (always descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinPct,
}

impl LeaderboardSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardSort::Wins => "wins",
            LeaderboardSort::WinPct => "win_pct",
        }
    }
}

impl FromStr for LeaderboardSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            other => Err(DomainError::InvalidSortKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for LeaderboardSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub meal: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u32,
    pub wins: u32,
    /// Percentage in 0..=100, one decimal place
    pub win_pct: f64,
}

impl LeaderboardEntry {
    pub fn from_meal(meal: &Meal) -> Self {
        Self {
            id: meal.id,
            meal: meal.name.clone(),
            cuisine: meal.cuisine.clone(),
            price: meal.price,
            difficulty: meal.difficulty,
            battles: meal.battles,
            wins: meal.wins,
            win_pct: win_percentage(meal.wins, meal.battles),
        }
    }

    fn win_ratio(&self) -> f64 {
        if self.battles == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.battles)
        }
    }
}

/// `wins / battles` as a percentage rounded to one decimal place.
/// Exact halves round to the even digit (1 of 16 gives 6.2).
pub fn win_percentage(wins: u32, battles: u32) -> f64 {
    if battles == 0 {
        return 0.0;
    }
    let pct = f64::from(wins) / f64::from(battles) * 100.0;
    (pct * 10.0).round_ties_even() / 10.0
}

/// Order entries descending by `sort`. Ties keep their incoming order.
/// Win percentage ranks on the unrounded ratio.
pub fn rank(mut entries: Vec<LeaderboardEntry>, sort: LeaderboardSort) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| compare(b, a, sort));
    entries
}

fn compare(a: &LeaderboardEntry, b: &LeaderboardEntry, sort: LeaderboardSort) -> Ordering {
    match sort {
        LeaderboardSort::Wins => a.wins.cmp(&b.wins),
        LeaderboardSort::WinPct => a.win_ratio().total_cmp(&b.win_ratio()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str, battles: u32, wins: u32) -> LeaderboardEntry {
        let mut meal = Meal::new(id, name, "Italian", 10.0, Difficulty::Med);
        meal.battles = battles;
        meal.wins = wins;
        LeaderboardEntry::from_meal(&meal)
    }

    fn ids(entries: &[LeaderboardEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_win_percentage_rounding() {
        assert_eq!(win_percentage(3, 5), 60.0);
        assert_eq!(win_percentage(2, 4), 50.0);
        assert_eq!(win_percentage(4, 6), 66.7);
        assert_eq!(win_percentage(5, 6), 83.3);
        assert_eq!(win_percentage(1, 3), 33.3);
        assert_eq!(win_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_win_percentage_halves_round_to_even() {
        assert_eq!(win_percentage(1, 16), 6.2);
        assert_eq!(win_percentage(3, 16), 18.8);
        assert_eq!(win_percentage(1, 8), 12.5);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("wins".parse::<LeaderboardSort>().unwrap(), LeaderboardSort::Wins);
        assert_eq!("win_pct".parse::<LeaderboardSort>().unwrap(), LeaderboardSort::WinPct);

        let err = "invalid_sort".parse::<LeaderboardSort>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid sort_by parameter: invalid_sort");
    }

    #[test]
    fn test_rank_by_wins() {
        let entries = vec![
            entry(1, "Pizza", 5, 3),
            entry(2, "Burger", 4, 2),
            entry(3, "Sushi", 6, 4),
        ];
        let ranked = rank(entries, LeaderboardSort::Wins);
        assert_eq!(ids(&ranked), vec![3, 1, 2]);
        assert_eq!(ranked[0].win_pct, 66.7);
    }

    #[test]
    fn test_rank_by_win_pct() {
        let entries = vec![
            entry(1, "Pizza", 5, 3),
            entry(2, "Burger", 4, 2),
            entry(3, "Sushi", 6, 5),
        ];
        let ranked = rank(entries, LeaderboardSort::WinPct);
        assert_eq!(ids(&ranked), vec![3, 1, 2]);
        assert_eq!(ranked[0].win_pct, 83.3);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let entries = vec![
            entry(4, "Tacos", 4, 2),
            entry(1, "Pizza", 2, 1),
            entry(9, "Ramen", 10, 5),
            entry(2, "Burger", 1, 1),
        ];

        let by_wins = rank(entries.clone(), LeaderboardSort::Wins);
        assert_eq!(ids(&by_wins), vec![9, 4, 1, 2]);

        let by_pct = rank(entries, LeaderboardSort::WinPct);
        assert_eq!(ids(&by_pct), vec![2, 4, 1, 9]);
    }
}
