// src/application/commands/maintenance_commands.rs

use crate::application::{dto::*, state::AppState};
use crate::db::{get_connection, get_database_stats, verify_database_integrity};
use crate::error::AppResult;

/// Liveness check: the database answers a trivial query
pub fn health(state: &AppState) -> AppResult<StatusDto> {
    let conn = get_connection(&state.pool)?;
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
    Ok(StatusDto::ok())
}

/// Integrity check plus basic table counts
pub fn db_check(state: &AppState) -> AppResult<DatabaseCheckDto> {
    let conn = get_connection(&state.pool)?;
    verify_database_integrity(&conn)?;
    let stats = get_database_stats(&conn)?;
    Ok(DatabaseCheckDto::from(stats))
}
