// src/domain/meal/entity.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// A meal registered in the kitchen, eligible for battles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Database identifier, immutable once assigned
    pub id: i64,

    /// Display name (unique among active meals)
    pub name: String,

    /// Category label used by the battle score
    pub cuisine: String,

    /// Always positive
    pub price: f64,

    pub difficulty: Difficulty,

    /// Cumulative battles fought
    pub battles: u32,

    /// Cumulative wins (never above `battles`)
    pub wins: u32,

    /// Soft-delete flag
    pub deleted: bool,

    pub created_at: DateTime<Utc>,
}

impl Meal {
    /// Build an active meal with no battle history
    pub fn new(
        id: i64,
        name: impl Into<String>,
        cuisine: impl Into<String>,
        price: f64,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cuisine: cuisine.into(),
            price,
            difficulty,
            battles: 0,
            wins: 0,
            deleted: false,
            created_at: Utc::now(),
        }
    }
}

/// Input for registering a new meal
#[derive(Debug, Clone, PartialEq)]
pub struct NewMeal {
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
}

/// Preparation difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "LOW",
            Difficulty::Med => "MED",
            Difficulty::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    /// Accepts the stored spellings plus `MEDIUM` as an alias of `MED`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Difficulty::Low),
            "MED" | "MEDIUM" => Ok(Difficulty::Med),
            "HIGH" => Ok(Difficulty::High),
            other => Err(DomainError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// How a meal was looked up, used in not-found / deleted errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealKey {
    Id(i64),
    Name(String),
}

impl std::fmt::Display for MealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealKey::Id(id) => write!(f, "ID {}", id),
            MealKey::Name(name) => write!(f, "name {}", name),
        }
    }
}
