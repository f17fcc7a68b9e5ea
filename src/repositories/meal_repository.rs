// src/repositories/meal_repository.rs
//
// Meal persistence

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, ErrorCode, Row};

use crate::db::{self, ConnectionPool};
use crate::domain::{BattleResult, Difficulty, Meal, MealKey, NewMeal};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait MealRepository: Send + Sync {
    /// Insert a meal, returning its new id
    fn create(&self, meal: &NewMeal) -> AppResult<i64>;
    /// Fetch by id, deleted rows included
    fn get_by_id(&self, id: i64) -> AppResult<Option<Meal>>;
    /// Fetch by name, preferring the active row over deleted ones
    fn get_by_name(&self, name: &str) -> AppResult<Option<Meal>>;
    fn mark_deleted(&self, id: i64) -> AppResult<()>;
    /// Add one battle, and one win when `result` is a win
    fn increment_stats(&self, id: i64, result: BattleResult) -> AppResult<()>;
    /// Active meals with at least one battle, in id order
    fn list_with_battles(&self) -> AppResult<Vec<Meal>>;
    /// Drop every meal and recreate the table
    fn reset(&self) -> AppResult<()>;
}

const MEAL_COLUMNS: &str =
    "id, meal, cuisine, price, difficulty, battles, wins, deleted, created_at";

pub struct SqliteMealRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMealRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Meal - returns rusqlite::Error for query_map compatibility
    fn row_to_meal(row: &Row) -> Result<Meal, rusqlite::Error> {
        let difficulty_str: String = row.get("difficulty")?;
        let difficulty: Difficulty = difficulty_str
            .parse()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

        let created_at_str: String = row.get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e)))?;

        Ok(Meal {
            id: row.get("id")?,
            name: row.get("meal")?,
            cuisine: row.get("cuisine")?,
            price: row.get("price")?,
            difficulty,
            battles: row.get("battles")?,
            wins: row.get("wins")?,
            deleted: row.get("deleted")?,
            created_at,
        })
    }
}

impl MealRepository for SqliteMealRepository {
    fn create(&self, meal: &NewMeal) -> AppResult<i64> {
        let conn = self.pool.get()?;

        let result = conn.execute(
            "INSERT INTO meals (meal, cuisine, price, difficulty, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                meal.name,
                meal.cuisine,
                meal.price,
                meal.difficulty.as_str(),
                Utc::now().to_rfc3339(),
            ],
        );

        match result {
            Ok(_) => Ok(conn.last_insert_rowid()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(AppError::DuplicateMeal(meal.name.clone()))
            }
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Meal>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!("SELECT {} FROM meals WHERE id = ?1", MEAL_COLUMNS))?;

        match stmt.query_row(params![id], Self::row_to_meal) {
            Ok(meal) => Ok(Some(meal)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_by_name(&self, name: &str) -> AppResult<Option<Meal>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM meals WHERE meal = ?1 ORDER BY deleted ASC, id DESC LIMIT 1",
            MEAL_COLUMNS
        ))?;

        match stmt.query_row(params![name], Self::row_to_meal) {
            Ok(meal) => Ok(Some(meal)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn mark_deleted(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected =
            conn.execute("UPDATE meals SET deleted = TRUE WHERE id = ?1", params![id])?;

        if rows_affected == 0 {
            return Err(AppError::RecordNotFound(MealKey::Id(id)));
        }

        Ok(())
    }

    fn increment_stats(&self, id: i64, result: BattleResult) -> AppResult<()> {
        let conn = self.pool.get()?;

        let sql = match result {
            BattleResult::Win => {
                "UPDATE meals SET battles = battles + 1, wins = wins + 1 WHERE id = ?1"
            }
            BattleResult::Loss => "UPDATE meals SET battles = battles + 1 WHERE id = ?1",
        };

        let rows_affected = conn.execute(sql, params![id])?;

        if rows_affected == 0 {
            return Err(AppError::RecordNotFound(MealKey::Id(id)));
        }

        Ok(())
    }

    fn list_with_battles(&self) -> AppResult<Vec<Meal>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM meals WHERE deleted = FALSE AND battles > 0 ORDER BY id",
            MEAL_COLUMNS
        ))?;

        let meals: Vec<Meal> = stmt.query_map([], Self::row_to_meal)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(meals)
    }

    fn reset(&self) -> AppResult<()> {
        let conn = self.pool.get()?;
        db::reset_meals(&conn)
    }
}
