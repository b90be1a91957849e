// ABOUTME: Fitlog CLI - command-line front end for the nutrition goal engine
// ABOUTME: Runs the macro solver, loads or saves goals, and logs meals on the fitness backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Split 2000 kcal with the keto preset
//! fitlog-cli preset --preset keto --calories 2000
//!
//! # Raise protein to 150 g while calories are locked
//! fitlog-cli recompute --field protein --value 150 \
//!     --calories 2000 --protein 100 --carbs 25 --fat 167 --locked calories --preset keto
//!
//! # List the built-in presets
//! fitlog-cli presets
//!
//! # Show or change the goal stored on the backend (FITLOG_API_URL, FITLOG_ACCESS_TOKEN)
//! fitlog-cli goal show
//! fitlog-cli goal set --field calories --value 2200 --preset high_protein
//!
//! # Search the backend food catalog
//! fitlog-cli foods search oat
//!
//! # Log 80 g of oatmeal for breakfast, then compare today's intake with the goal
//! fitlog-cli meals add --type breakfast --food oatmeal --amount 80
//! fitlog-cli meals summary
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitlog::intelligence::food_portions::DEFAULT_LOGGED_AMOUNT_G;
use fitlog::intelligence::MacroPresetKind;
use fitlog::logging::LoggingConfig;
use fitlog::models::MacroField;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitlog-cli",
    about = "Fitlog nutrition goal CLI",
    long_about = "Recompute nutrition goals with lockable macros, and manage the goal stored on the fitness backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Derive a goal from a preset and a calorie target
    Preset {
        /// Preset name (maintenance, keto, high_protein, low_carb, endurance)
        #[arg(long, default_value = "maintenance")]
        preset: MacroPresetKind,

        /// Daily calorie target
        #[arg(long)]
        calories: f64,
    },

    /// Recompute a goal after editing one field
    Recompute {
        /// Field being edited (calories, protein, carbs, fat)
        #[arg(long)]
        field: MacroField,

        /// New value as typed; non-numeric or negative input counts as 0
        #[arg(long, allow_hyphen_values = true)]
        value: String,

        /// Current calories
        #[arg(long, default_value_t = 0.0)]
        calories: f64,

        /// Current protein grams
        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        /// Current carbohydrate grams
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        /// Current fat grams
        #[arg(long, default_value_t = 0.0)]
        fat: f64,

        /// Locked field, if any
        #[arg(long)]
        locked: Option<MacroField>,

        /// Active preset
        #[arg(long, default_value = "maintenance")]
        preset: MacroPresetKind,
    },

    /// List the built-in presets
    Presets,

    /// Goal stored on the fitness backend
    Goal {
        #[command(subcommand)]
        action: GoalCommand,
    },

    /// Food catalog on the fitness backend
    Foods {
        #[command(subcommand)]
        action: FoodsCommand,
    },

    /// Meals logged on the fitness backend
    Meals {
        #[command(subcommand)]
        action: MealsCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GoalCommand {
    /// Print the stored goal (or the default goal if none is stored)
    Show {
        /// User label for logs
        #[arg(long, default_value = "me")]
        user: String,
    },

    /// Edit one field of the stored goal and save it
    Set {
        /// Field being edited (calories, protein, carbs, fat)
        #[arg(long)]
        field: MacroField,

        /// New value
        #[arg(long, allow_hyphen_values = true)]
        value: String,

        /// Field to lock while editing
        #[arg(long)]
        locked: Option<MacroField>,

        /// Switch to this preset before editing
        #[arg(long)]
        preset: Option<MacroPresetKind>,

        /// User label for logs
        #[arg(long, default_value = "me")]
        user: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodsCommand {
    /// Case-insensitive name search (empty query lists everything)
    Search {
        /// Text to look for in food names
        #[arg(default_value = "")]
        query: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum MealsCommand {
    /// Compare a day's intake with the stored goal
    Summary {
        /// Day to summarize (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// User label for logs
        #[arg(long, default_value = "me")]
        user: String,
    },

    /// Log a catalog food as a new meal
    Add {
        /// Meal type (breakfast, lunch, dinner, snack)
        #[arg(long = "type", default_value = "snack")]
        meal_type: String,

        /// Catalog id of the food
        #[arg(long)]
        food: String,

        /// Grams for weight foods, count for unit foods
        #[arg(long, default_value_t = DEFAULT_LOGGED_AMOUNT_G)]
        amount: f64,

        /// Day the meal belongs to (YYYY-MM-DD, default now)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Change the amount of a logged food
    Adjust {
        /// Meal id
        #[arg(long)]
        meal: String,

        /// Logged food id within the meal
        #[arg(long)]
        item: String,

        /// New amount
        #[arg(long)]
        amount: f64,

        /// Day the meal was logged (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete one meal or every meal of a day
    Clear {
        /// Meal id to delete
        #[arg(long, conflicts_with = "date")]
        id: Option<String>,

        /// Day whose meals are deleted (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout stays JSON)
    let mut logging = LoggingConfig::from_env();
    logging.level = if cli.verbose { "debug" } else { "warn" }.to_owned();
    logging.init()?;

    debug!("Fitlog CLI");

    match cli.command {
        Command::Preset { preset, calories } => commands::solver::preset(preset, calories)?,
        Command::Recompute {
            field,
            value,
            calories,
            protein,
            carbs,
            fat,
            locked,
            preset,
        } => {
            let current = fitlog::models::MacroState::new(calories, protein, carbs, fat);
            commands::solver::recompute(field, &value, current, locked, preset)?;
        }
        Command::Presets => commands::solver::presets()?,
        Command::Goal { action } => match action {
            GoalCommand::Show { user } => commands::goal::show(&user).await?,
            GoalCommand::Set {
                field,
                value,
                locked,
                preset,
                user,
            } => {
                commands::goal::set(&user, field, &value, locked, preset).await?;
            }
        },
        Command::Foods { action } => match action {
            FoodsCommand::Search { query } => commands::foods::search(&query).await?,
        },
        Command::Meals { action } => match action {
            MealsCommand::Summary { date, user } => commands::meals::summary(&user, date).await?,
            MealsCommand::Add {
                meal_type,
                food,
                amount,
                date,
            } => commands::meals::add(&meal_type, &food, amount, date).await?,
            MealsCommand::Adjust {
                meal,
                item,
                amount,
                date,
            } => commands::meals::adjust(&meal, &item, amount, date).await?,
            MealsCommand::Clear { id, date } => commands::meals::clear(id, date).await?,
        },
    }

    Ok(())
}
