// src/services/battle_service.rs
//
// Battle Service - combatant staging and battle resolution
//
// ARCHITECTURE:
// - Owns one staging area (single owner, no internal locking)
// - Random draws come from an injected `RandomSource`
// - Stats updates go through an injected `MealStatsUpdater`
//
// CRITICAL RULES:
// - Collaborator errors propagate unchanged, no retries
// - The loser is evicted only after both stats updates succeed

use log::{debug, info};
use std::sync::Arc;

use crate::domain::{
    battle_score, decide_winner, win_edge, BattleResult, CombatantStaging, Meal, Side,
};
use crate::error::AppResult;
use crate::integrations::RandomSource;

/// Records a battle result against a stored meal
#[cfg_attr(test, mockall::automock)]
pub trait MealStatsUpdater: Send + Sync {
    /// Fails for unknown or soft-deleted meals
    fn update_meal_stats(&self, meal_id: i64, result: BattleResult) -> AppResult<()>;
}

/// Everything that went into one resolved battle
#[derive(Debug, Clone, PartialEq)]
pub struct BattleReport {
    pub winner: Meal,
    pub loser: Meal,
    pub first_score: f64,
    pub second_score: f64,
    /// Normalized score gap in [0, 1]
    pub edge: f64,
    /// Value drawn from the random source
    pub draw: f64,
    pub winning_side: Side,
}

pub struct BattleService {
    staging: CombatantStaging,
    random_source: Arc<dyn RandomSource>,
    stats_updater: Arc<dyn MealStatsUpdater>,
}

impl BattleService {
    pub fn new(
        random_source: Arc<dyn RandomSource>,
        stats_updater: Arc<dyn MealStatsUpdater>,
    ) -> Self {
        Self {
            staging: CombatantStaging::new(),
            random_source,
            stats_updater,
        }
    }

    pub fn prep_combatant(&mut self, meal: Meal) -> AppResult<()> {
        let name = meal.name.clone();
        self.staging.add(meal)?;
        info!(
            "Added combatant '{}'. Current combatants: {}",
            name,
            self.combatant_names().join(", ")
        );
        Ok(())
    }

    pub fn clear_combatants(&mut self) {
        info!("Clearing the combatants list.");
        self.staging.clear();
    }

    /// Snapshot of the staged combatants
    pub fn get_combatants(&self) -> Vec<Meal> {
        self.staging.list()
    }

    /// Resolve a battle and return the winner's name
    pub fn battle(&mut self) -> AppResult<String> {
        self.resolve().map(|report| report.winner.name)
    }

    /// Resolve a battle between the two staged combatants
    pub fn resolve(&mut self) -> AppResult<BattleReport> {
        let (first, second) = self.staging.pair()?;
        info!("Two meals enter, one meal leaves!");

        let first_score = battle_score(first);
        let second_score = battle_score(second);
        info!("Score for {}: {:.3}", first.name, first_score);
        info!("Score for {}: {:.3}", second.name, second_score);

        let edge = win_edge(first_score, second_score);
        debug!("Normalized score edge: {:.3}", edge);

        let draw = self.random_source.get_random()?;
        debug!("Random draw: {:.3}", draw);

        let winning_side = decide_winner(draw, edge);
        let (winner, loser) = match winning_side {
            Side::First => (first.clone(), second.clone()),
            Side::Second => (second.clone(), first.clone()),
        };
        info!("The winner is: {}", winner.name);

        self.stats_updater
            .update_meal_stats(winner.id, BattleResult::Win)?;
        self.stats_updater
            .update_meal_stats(loser.id, BattleResult::Loss)?;

        self.staging.evict(winning_side.opposite().position());
        debug!("Removed loser '{}' from combatants", loser.name);

        Ok(BattleReport {
            winner,
            loser,
            first_score,
            second_score,
            edge,
            draw,
            winning_side,
        })
    }

    fn combatant_names(&self) -> Vec<String> {
        self.staging.list().into_iter().map(|meal| meal.name).collect()
    }
}
