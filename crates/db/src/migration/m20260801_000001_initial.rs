//! Initial database migration.
//!
//! Creates the enum types, ledger tables, foreign keys with cascade
//! semantics, and indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: REFERENCE DATA
        // ============================================================
        db.execute_unprepared(PONDS_SQL).await?;
        db.execute_unprepared(FISH_SPECIES_SQL).await?;

        // ============================================================
        // PART 3: STOCKING & CYCLES
        // ============================================================
        db.execute_unprepared(STOCKS_SQL).await?;
        db.execute_unprepared(PRODUCTION_CYCLES_SQL).await?;

        // ============================================================
        // PART 4: EVENT LEDGER
        // ============================================================
        db.execute_unprepared(FEED_RECORDS_SQL).await?;
        db.execute_unprepared(MORTALITY_RECORDS_SQL).await?;
        db.execute_unprepared(HARVESTS_SQL).await?;
        db.execute_unprepared(FISH_SALES_SQL).await?;
        db.execute_unprepared(EXPENSES_SQL).await?;

        // ============================================================
        // PART 5: REPORT SNAPSHOTS
        // ============================================================
        db.execute_unprepared(FINANCIAL_REPORTS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Production cycle status
CREATE TYPE cycle_status AS ENUM ('running', 'completed');
";

const PONDS_SQL: &str = r"
CREATE TABLE ponds (
    id UUID PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    size_acres DECIMAL(8, 2) NOT NULL,
    water_source VARCHAR(100) NOT NULL,
    location VARCHAR(150),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const FISH_SPECIES_SQL: &str = r"
CREATE TABLE fish_species (
    id UUID PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    average_growth_days INTEGER NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const STOCKS_SQL: &str = r"
CREATE TABLE stocks (
    id UUID PRIMARY KEY,
    pond_id UUID NOT NULL REFERENCES ponds(id) ON DELETE CASCADE,
    species_id UUID NOT NULL REFERENCES fish_species(id) ON DELETE CASCADE,
    quantity INTEGER NOT NULL CHECK (quantity >= 0),
    stocking_date DATE NOT NULL,
    cost DECIMAL(10, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_stocks_pond ON stocks(pond_id);
CREATE INDEX idx_stocks_stocking_date ON stocks(stocking_date);
";

const PRODUCTION_CYCLES_SQL: &str = r"
CREATE TABLE production_cycles (
    id UUID PRIMARY KEY,
    pond_id UUID NOT NULL REFERENCES ponds(id) ON DELETE CASCADE,
    species_id UUID NOT NULL REFERENCES fish_species(id) ON DELETE CASCADE,
    stocking_date DATE NOT NULL,
    initial_quantity INTEGER NOT NULL CHECK (initial_quantity >= 0),
    initial_avg_weight_g DECIMAL(8, 2) NOT NULL,
    expected_harvest_date DATE NOT NULL,
    status cycle_status NOT NULL DEFAULT 'running',
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_production_cycles_stocking_date ON production_cycles(stocking_date);
";

const FEED_RECORDS_SQL: &str = r"
CREATE TABLE feed_records (
    id UUID PRIMARY KEY,
    pond_id UUID NOT NULL REFERENCES ponds(id) ON DELETE CASCADE,
    cycle_id UUID REFERENCES production_cycles(id) ON DELETE SET NULL,
    feed_type VARCHAR(100) NOT NULL,
    quantity_kg DECIMAL(10, 2) NOT NULL CHECK (quantity_kg >= 0),
    cost DECIMAL(10, 2) NOT NULL,
    date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_feed_records_pond ON feed_records(pond_id);
CREATE INDEX idx_feed_records_date ON feed_records(date);
";

const MORTALITY_RECORDS_SQL: &str = r"
CREATE TABLE mortality_records (
    id UUID PRIMARY KEY,
    stock_id UUID REFERENCES stocks(id) ON DELETE CASCADE,
    cycle_id UUID REFERENCES production_cycles(id) ON DELETE SET NULL,
    quantity_dead INTEGER NOT NULL CHECK (quantity_dead >= 0),
    date DATE NOT NULL,
    reason TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_mortality_records_stock ON mortality_records(stock_id);
";

const HARVESTS_SQL: &str = r"
CREATE TABLE harvests (
    id UUID PRIMARY KEY,
    stock_id UUID REFERENCES stocks(id) ON DELETE CASCADE,
    cycle_id UUID REFERENCES production_cycles(id) ON DELETE SET NULL,
    quantity_kg INTEGER NOT NULL CHECK (quantity_kg >= 0),
    harvest_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_harvests_stock ON harvests(stock_id);
";

const FISH_SALES_SQL: &str = r"
CREATE TABLE fish_sales (
    id UUID PRIMARY KEY,
    harvest_id UUID NOT NULL REFERENCES harvests(id) ON DELETE CASCADE,
    buyer_name VARCHAR(100) NOT NULL,
    quantity_kg INTEGER NOT NULL CHECK (quantity_kg >= 0),
    price_per_kg DECIMAL(10, 2) NOT NULL CHECK (price_per_kg >= 0),
    total_amount DECIMAL(12, 2) NOT NULL,
    sale_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_fish_sales_harvest ON fish_sales(harvest_id);
CREATE INDEX idx_fish_sales_sale_date ON fish_sales(sale_date);
";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id UUID PRIMARY KEY,
    cycle_id UUID NOT NULL REFERENCES production_cycles(id) ON DELETE CASCADE,
    description VARCHAR(255) NOT NULL,
    amount DECIMAL(10, 2) NOT NULL,
    expense_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_expenses_cycle ON expenses(cycle_id);
";

const FINANCIAL_REPORTS_SQL: &str = r"
CREATE TABLE financial_reports (
    id UUID PRIMARY KEY,
    year INTEGER NOT NULL UNIQUE,
    total_fish_purchase DECIMAL(12, 2) NOT NULL,
    total_feed_purchase DECIMAL(12, 2) NOT NULL,
    total_medicine_purchase DECIMAL(12, 2) NOT NULL,
    total_other_expenses DECIMAL(12, 2) NOT NULL,
    total_investment DECIMAL(12, 2) NOT NULL,
    total_sales_revenue DECIMAL(12, 2) NOT NULL,
    roi_percentage DECIMAL(8, 2) NOT NULL,
    net_profit DECIMAL(12, 2) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS financial_reports;
DROP TABLE IF EXISTS expenses;
DROP TABLE IF EXISTS fish_sales;
DROP TABLE IF EXISTS harvests;
DROP TABLE IF EXISTS mortality_records;
DROP TABLE IF EXISTS feed_records;
DROP TABLE IF EXISTS production_cycles;
DROP TABLE IF EXISTS stocks;
DROP TABLE IF EXISTS fish_species;
DROP TABLE IF EXISTS ponds;
DROP TYPE IF EXISTS cycle_status;
";
