// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod battle_service;
pub mod meal_service;


pub use battle_service::{BattleReport, BattleService, MealStatsUpdater};

pub use meal_service::{CreateMealRequest, MealService};
