// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::services::{BattleService, MealService};

/// Application state handed to every command.
///
/// The battle service owns the staging area, so commands that touch it take
/// `&mut AppState`; there is exactly one staging area per state.
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub meal_service: Arc<MealService>,
    pub battle_service: BattleService,
}
