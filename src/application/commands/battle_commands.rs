// src/application/commands/battle_commands.rs
//
// Battle Command Handlers

use crate::application::{dto::*, state::AppState};
use crate::error::AppResult;

/// Stage a meal (looked up by name) for the next battle
pub fn prep_combatant(state: &mut AppState, meal_name: &str) -> AppResult<Vec<MealDto>> {
    let meal = state.meal_service.get_meal_by_name(meal_name)?;
    state.battle_service.prep_combatant(meal)?;
    Ok(get_combatants(state))
}

pub fn get_combatants(state: &AppState) -> Vec<MealDto> {
    state
        .battle_service
        .get_combatants()
        .into_iter()
        .map(MealDto::from)
        .collect()
}

pub fn clear_combatants(state: &mut AppState) -> StatusDto {
    state.battle_service.clear_combatants();
    StatusDto {
        status: "Combatants cleared".to_string(),
    }
}

/// Resolve a battle between the staged combatants
pub fn battle(state: &mut AppState) -> AppResult<BattleOutcomeDto> {
    let report = state.battle_service.resolve()?;
    Ok(BattleOutcomeDto::from(report))
}

/// Stage `first` and `second` on a fresh staging area and fight
pub fn battle_by_names(
    state: &mut AppState,
    first: &str,
    second: &str,
) -> AppResult<BattleOutcomeDto> {
    state.battle_service.clear_combatants();
    prep_combatant(state, first)?;
    prep_combatant(state, second)?;
    battle(state)
}
