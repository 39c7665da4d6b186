use mealplan_rs::constants::API_URL;
use mealplan_rs::data_backend::qnips_fetcher::QnipsFetcher;
use mealplan_rs::data_types::LoadState;
use mealplan_rs::meal_table::MealTable;
use mealplan_rs::render::{render_json, render_text};
use mealplan_rs::shared_main::logger_init;
use mealplan_rs::week_calc::{FixedClock, SystemClock};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::log_enabled;

/// Shows this week's meal plan (Monday to Friday) including allergens.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Meal plan endpoint
    #[arg(long, env = "MEALPLAN_API_URL", default_value = API_URL)]
    api_url: String,
    /// Show the week containing this day instead of today{n}Example: 2024-06-05
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
    /// Enable verbose logging{n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    logger_init(module_path!());

    if !(log_enabled!(log::Level::Debug) || log_enabled!(log::Level::Trace)) {
        log::info!("Enable verbose logging for response details");
    }

    let fetcher = QnipsFetcher::with_url(args.api_url);
    log::info!("Loading meal plan from {}", fetcher.url());

    let table = match args.date {
        Some(date) => MealTable::init(&fetcher, &FixedClock(date)).await,
        None => MealTable::init(&fetcher, &SystemClock).await,
    };

    let output = if args.json {
        render_json(&table).context("could not serialize meal plan")?
    } else {
        render_text(&table)
    };
    println!("{}", output);

    if table.state() == LoadState::Failed {
        std::process::exit(1);
    }

    Ok(())
}
