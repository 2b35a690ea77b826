//! Database seeder for AquaLedger development and testing.
//!
//! Seeds a pond, a species, a stocked batch with mortality, harvest, and
//! sale events, a production cycle with feed and expenses, and a first
//! yearly report snapshot. Everything goes through the repositories so the
//! lifecycle guards run exactly as they would in production.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use aqualedger_shared::AppConfig;

use aqualedger_db::repositories::{
    CreateCycleInput, CreateExpenseInput, CreateFeedInput, CreateHarvestInput,
    CreateMortalityInput, CreatePondInput, CreateSaleInput, CreateSpeciesInput, CreateStockInput,
    CycleRepository, ExpenseRepository, FeedRepository, HarvestRepository, MortalityRepository,
    PondRepository, ReportRepository, SaleRepository, SpeciesRepository, StockRepository,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = aqualedger_db::connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    let ponds = PondRepository::new(db.clone());
    if !ponds.list().await?.is_empty() {
        println!("Database already seeded, skipping...");
        return Ok(());
    }

    println!("Seeding pond...");
    let pond = ponds
        .create(CreatePondInput {
            name: "North Pond".to_string(),
            size_acres: money(150), // 1.50 acres
            water_source: "Borewell".to_string(),
            location: Some("North block".to_string()),
        })
        .await?;

    println!("Seeding species...");
    let species = SpeciesRepository::new(db.clone())
        .create(CreateSpeciesInput {
            name: "Tilapia".to_string(),
            average_growth_days: 180,
        })
        .await?;

    println!("Seeding stock...");
    let stock = StockRepository::new(db.clone())
        .create(CreateStockInput {
            pond_id: pond.id,
            species_id: species.id,
            quantity: 1000,
            stocking_date: date(2025, 2, 1),
            cost: money(40_000), // 400.00
        })
        .await?;

    println!("Seeding production cycle...");
    let cycle = CycleRepository::new(db.clone())
        .create(CreateCycleInput {
            pond_id: pond.id,
            species_id: species.id,
            stocking_date: date(2025, 2, 1),
            initial_quantity: 1000,
            initial_avg_weight_g: money(2_500), // 25.00 g
            expected_harvest_date: date(2025, 8, 1),
            notes: Some("First campaign of the season".to_string()),
        })
        .await?;

    println!("Seeding feed records...");
    let feeds = FeedRepository::new(db.clone());
    feeds
        .create(CreateFeedInput {
            pond_id: pond.id,
            cycle_id: Some(cycle.id),
            feed_type: "Starter pellets".to_string(),
            quantity_kg: money(12_050), // 120.50 kg
            cost: money(21_000),
            date: date(2025, 3, 5),
        })
        .await?;
    feeds
        .create(CreateFeedInput {
            pond_id: pond.id,
            cycle_id: Some(cycle.id),
            feed_type: "Grower pellets".to_string(),
            quantity_kg: money(20_000), // 200.00 kg
            cost: money(14_000),
            date: date(2025, 5, 10),
        })
        .await?;

    println!("Seeding mortality...");
    MortalityRepository::new(db.clone())
        .create(CreateMortalityInput {
            stock_id: Some(stock.id),
            cycle_id: Some(cycle.id),
            quantity_dead: 50,
            date: date(2025, 4, 12),
            reason: Some("Oxygen drop overnight".to_string()),
        })
        .await?;

    println!("Seeding harvest...");
    let harvest = HarvestRepository::new(db.clone())
        .create(CreateHarvestInput {
            stock_id: Some(stock.id),
            cycle_id: Some(cycle.id),
            quantity_kg: 400,
            harvest_date: date(2025, 7, 20),
        })
        .await?;

    println!("Seeding sale...");
    SaleRepository::new(db.clone())
        .create(CreateSaleInput {
            harvest_id: harvest.id,
            buyer_name: "City Fish Market".to_string(),
            quantity_kg: 350,
            price_per_kg: money(320), // 3.20
            sale_date: date(2025, 7, 22),
        })
        .await?;

    println!("Seeding expenses...");
    let expenses = ExpenseRepository::new(db.clone());
    expenses
        .create(CreateExpenseInput {
            cycle_id: cycle.id,
            description: "Medicine for fungal treatment".to_string(),
            amount: money(15_000),
            expense_date: date(2025, 4, 15),
        })
        .await?;
    expenses
        .create(CreateExpenseInput {
            cycle_id: cycle.id,
            description: "Electricity for aerators".to_string(),
            amount: money(8_000),
            expense_date: date(2025, 6, 1),
        })
        .await?;

    println!("Snapshotting 2025 report...");
    let report = ReportRepository::new(db).calculate_totals(2025).await?;
    println!(
        "  Investment {} | revenue {} | net profit {}",
        report.total_investment, report.total_sales_revenue, report.net_profit
    );

    println!("Seeding complete!");
    Ok(())
}
