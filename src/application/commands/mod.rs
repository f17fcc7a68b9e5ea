// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and Services
// - Commands accept DTOs, return DTOs
// - Commands NEVER contain business logic

pub mod battle_commands;
pub mod maintenance_commands;
pub mod meal_commands;

pub use battle_commands::*;
pub use maintenance_commands::*;
pub use meal_commands::*;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::dto::CreateMealDto;
    use crate::application::state::AppState;
    use crate::db::{create_memory_pool, initialize_database};
    use crate::error::AppError;
    use crate::integrations::random_org::MockRandomSource;
    use crate::repositories::SqliteMealRepository;
    use crate::services::{BattleService, MealService};

    fn state_with_draws(draw: f64) -> AppState {
        let pool = Arc::new(create_memory_pool().unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();

        let meal_service = Arc::new(MealService::new(Arc::new(SqliteMealRepository::new(
            pool.clone(),
        ))));

        let mut random = MockRandomSource::new();
        random.expect_get_random().returning(move || Ok(draw));

        AppState {
            pool,
            meal_service: meal_service.clone(),
            battle_service: BattleService::new(Arc::new(random), meal_service),
        }
    }

    fn add(state: &AppState, name: &str, cuisine: &str, price: f64, difficulty: &str) {
        create_meal(
            state,
            CreateMealDto {
                meal: name.to_string(),
                cuisine: cuisine.to_string(),
                price,
                difficulty: difficulty.to_string(),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_meal_lifecycle() {
        let state = state_with_draws(0.5);
        add(&state, "Pizza", "Italian", 10.0, "MED");

        let pizza = get_meal_by_name(&state, "Pizza").unwrap();
        assert_eq!(get_meal_by_id(&state, pizza.id).unwrap().meal, "Pizza");

        delete_meal(&state, pizza.id).unwrap();
        assert!(matches!(
            get_meal_by_id(&state, pizza.id),
            Err(AppError::RecordDeleted(_))
        ));
    }

    #[test]
    fn test_battle_by_names_and_leaderboard() {
        let mut state = state_with_draws(0.5);
        add(&state, "Spaghetti", "Thai", 17.75, "HIGH");
        add(&state, "Pizza", "Thai", 13.0, "MED");

        let outcome = battle_by_names(&mut state, "Spaghetti", "Pizza").unwrap();
        assert_eq!(outcome.winner, "Pizza");
        assert_eq!(outcome.loser, "Spaghetti");
        assert_eq!(get_combatants(&state).len(), 1);

        let board = get_leaderboard(&state, "wins").unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].meal, "Pizza");
        assert_eq!(board[0].win_pct, 100.0);
    }

    #[test]
    fn test_battle_by_names_resets_staging() {
        let mut state = state_with_draws(0.5);
        add(&state, "Spaghetti", "Thai", 17.75, "HIGH");
        add(&state, "Pizza", "Thai", 13.0, "MED");
        add(&state, "Sushi", "Japanese", 15.0, "HIGH");

        prep_combatant(&mut state, "Sushi").unwrap();
        battle_by_names(&mut state, "Spaghetti", "Pizza").unwrap();

        let remaining = get_combatants(&state);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].meal, "Pizza");
    }

    #[test]
    fn test_battle_without_combatants() {
        let mut state = state_with_draws(0.5);
        assert!(battle(&mut state).is_err());

        clear_combatants(&mut state);
        assert!(get_combatants(&state).is_empty());
    }

    #[test]
    fn test_record_result() {
        let state = state_with_draws(0.5);
        add(&state, "Pizza", "Italian", 10.0, "MED");
        let id = get_meal_by_name(&state, "Pizza").unwrap().id;

        record_result(&state, id, "win").unwrap();
        let meal = record_result(&state, id, "loss").unwrap();
        assert_eq!(meal.battles, 2);
        assert_eq!(meal.wins, 1);
    }

    #[test]
    fn test_record_result_rejects_unknown_outcome() {
        let state = state_with_draws(0.5);
        add(&state, "Pizza", "Italian", 10.0, "MED");
        let id = get_meal_by_name(&state, "Pizza").unwrap().id;

        let err = record_result(&state, id, "draw").unwrap_err();
        assert_eq!(err.to_string(), "Invalid result: draw. Expected 'win' or 'loss'.");
        assert_eq!(get_meal_by_id(&state, id).unwrap().battles, 0);
    }

    #[test]
    fn test_invalid_leaderboard_sort() {
        let state = state_with_draws(0.5);
        let err = get_leaderboard(&state, "invalid_sort").unwrap_err();
        assert_eq!(err.to_string(), "Invalid sort_by parameter: invalid_sort");
    }

    #[test]
    fn test_clear_meals_and_maintenance() {
        let state = state_with_draws(0.5);
        add(&state, "Pizza", "Italian", 10.0, "MED");

        clear_meals(&state).unwrap();
        assert!(get_meal_by_name(&state, "Pizza").is_err());

        assert_eq!(health(&state).unwrap().status, "healthy");
        let check = db_check(&state).unwrap();
        assert_eq!(check.meal_count, 0);
    }
}
