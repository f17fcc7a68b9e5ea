// src/domain/battle/staging.rs
//
// Combatant staging area
//
// INVARIANTS:
// - Holds at most MAX_COMBATANTS meals
// - Insertion order is preserved (first / second combatant)
// - No deduplication: the caller decides who fights
// - Never persisted

use log::{debug, warn};

use crate::domain::meal::Meal;
use crate::domain::{DomainError, DomainResult};

pub const MAX_COMBATANTS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct CombatantStaging {
    combatants: Vec<Meal>,
}

impl CombatantStaging {
    pub fn new() -> Self {
        Self {
            combatants: Vec::with_capacity(MAX_COMBATANTS),
        }
    }

    /// Append a combatant, refusing when the area is already full
    pub fn add(&mut self, meal: Meal) -> DomainResult<()> {
        if self.combatants.len() >= MAX_COMBATANTS {
            warn!(
                "Attempted to add combatant '{}' but combatants list is full",
                meal.name
            );
            return Err(DomainError::CapacityExceeded);
        }

        debug!("Adding combatant '{}' to staging", meal.name);
        self.combatants.push(meal);
        Ok(())
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} staged combatant(s)", self.combatants.len());
        self.combatants.clear();
    }

    /// Snapshot of the staged combatants. Mutating it does not touch staging.
    pub fn list(&self) -> Vec<Meal> {
        self.combatants.clone()
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Both combatants in insertion order, or `InsufficientCombatants`
    pub fn pair(&self) -> DomainResult<(&Meal, &Meal)> {
        match self.combatants.as_slice() {
            [first, second] => Ok((first, second)),
            _ => Err(DomainError::InsufficientCombatants),
        }
    }

    /// Remove the combatant at `position`, keeping the other one
    pub fn evict(&mut self, position: usize) -> Option<Meal> {
        if position < self.combatants.len() {
            Some(self.combatants.remove(position))
        } else {
            None
        }
    }
}
