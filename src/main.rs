// src/main.rs
//
// meal-max command-line entry point

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use meal_max::application::commands::*;
use meal_max::application::dto::CreateMealDto;
use meal_max::application::error_handling::ErrorResponse;
use meal_max::application::state::AppState;
use meal_max::config::AppConfig;
use meal_max::db::{create_connection_pool, initialize_database};
use meal_max::error::AppResult;
use meal_max::integrations::RandomOrgClient;
use meal_max::repositories::{MealRepository, SqliteMealRepository};
use meal_max::services::{BattleService, MealService};

/// Meal roster and battle simulator
#[derive(Parser)]
#[command(name = "meal-max")]
#[command(about = "Manage meals and let them battle", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a meal to the catalog
    CreateMeal(CreateMealArgs),

    /// Soft-delete a meal by ID
    DeleteMeal {
        id: i64,
    },

    /// Record a win or loss for a meal by ID
    RecordResult {
        id: i64,

        /// "win" or "loss"
        result: String,
    },

    /// Look up a meal by ID or by name
    GetMeal(GetMealArgs),

    /// Show meals that have battled, best first
    Leaderboard {
        /// Sort key: "wins" or "win_pct"
        #[arg(long, default_value = "wins")]
        sort: String,
    },

    /// Stage two meals by name and fight
    Battle {
        first: String,
        second: String,
    },

    /// Drop and recreate the meals table
    ClearMeals,

    /// Check that the database answers
    Health,

    /// Run an integrity check and print table counts
    DbCheck,
}

#[derive(Args)]
struct CreateMealArgs {
    #[arg(long)]
    meal: String,

    #[arg(long)]
    cuisine: String,

    #[arg(long)]
    price: f64,

    /// LOW, MED or HIGH
    #[arg(long)]
    difficulty: String,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct GetMealArgs {
    #[arg(long)]
    id: Option<i64>,

    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("failed to load configuration")?;
    let mut state = build_state(&config)?;

    let outcome = dispatch(&mut state, cli.command);
    match outcome {
        Ok(json) => {
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            let response = ErrorResponse::from_app_error(error);
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn build_state(config: &AppConfig) -> Result<AppState> {
    // 1. INFRASTRUCTURE
    let pool = Arc::new(
        create_connection_pool(&config.database_path, config.pool_size)
            .context("failed to open database")?,
    );

    // Initialize schema (idempotent)
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;
    }

    tracing::info!("Using database at {}", config.database_path.display());

    // 2. REPOSITORIES
    let meal_repo: Arc<dyn MealRepository> = Arc::new(SqliteMealRepository::new(pool.clone()));

    // 3. INTEGRATIONS
    let random_source = Arc::new(RandomOrgClient::new(
        config.random_org_url.clone(),
        config.random_timeout,
    )?);

    // 4. SERVICES
    let meal_service = Arc::new(MealService::new(meal_repo));
    let battle_service = BattleService::new(random_source, meal_service.clone());

    Ok(AppState {
        pool,
        meal_service,
        battle_service,
    })
}

fn dispatch(state: &mut AppState, command: Command) -> AppResult<String> {
    match command {
        Command::CreateMeal(args) => to_json(&create_meal(
            state,
            CreateMealDto {
                meal: args.meal,
                cuisine: args.cuisine,
                price: args.price,
                difficulty: args.difficulty,
            },
        )?),
        Command::DeleteMeal { id } => to_json(&delete_meal(state, id)?),
        Command::RecordResult { id, result } => to_json(&record_result(state, id, &result)?),
        Command::GetMeal(GetMealArgs { id: Some(id), .. }) => to_json(&get_meal_by_id(state, id)?),
        Command::GetMeal(GetMealArgs { name, .. }) => {
            to_json(&get_meal_by_name(state, name.as_deref().unwrap_or_default())?)
        }
        Command::Leaderboard { sort } => to_json(&get_leaderboard(state, &sort)?),
        Command::Battle { first, second } => to_json(&battle_by_names(state, &first, &second)?),
        Command::ClearMeals => to_json(&clear_meals(state)?),
        Command::Health => to_json(&health(state)?),
        Command::DbCheck => to_json(&db_check(state)?),
    }
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
