//! Presentation layer: loads a product list, prints the inventory report.
//!
//! All rendering lives here; the reports crate only produces values.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use botica_core::ProductId;
use botica_inventory::{InMemoryProductStore, Inventory, DEFAULT_REORDER_THRESHOLD};
use botica_products::Product;
use botica_reports::ReportGenerator;

#[derive(Debug, Parser)]
#[command(name = "botica", about = "Pharmacy inventory report generator")]
struct Cli {
    /// JSON file with a product array; demo data is seeded when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Reorder threshold for the low-stock listing (inclusive).
    #[arg(long, default_value_t = DEFAULT_REORDER_THRESHOLD)]
    threshold: i64,

    /// Pretty-print the report JSON.
    #[arg(long)]
    pretty: bool,
}

/// Input row shape: `{"sku": ..., "name": ..., "unit_price": ..., "quantity": ...}`.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    sku: String,
    name: String,
    /// Smallest currency unit (cents).
    unit_price: u64,
    quantity: i64,
}

fn demo_records() -> Vec<ProductRecord> {
    [
        ("PARA-500", "Paracetamol 500mg", 250u64, 120i64),
        ("IBUP-400", "Ibuprofen 400mg", 320, 4),
        ("AMOX-250", "Amoxicillin 250mg", 890, 45),
        ("LORA-10", "Loratadine 10mg", 410, 2),
        ("OMEP-20", "Omeprazole 20mg", 650, 30),
    ]
    .into_iter()
    .map(|(sku, name, unit_price, quantity)| ProductRecord {
        sku: sku.to_string(),
        name: name.to_string(),
        unit_price,
        quantity,
    })
    .collect()
}

fn load_records(input: Option<&PathBuf>) -> anyhow::Result<Vec<ProductRecord>> {
    match input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse {}", path.display()))
        }
        None => Ok(demo_records()),
    }
}

fn main() -> anyhow::Result<()> {
    botica_observability::init();

    let cli = Cli::parse();
    let records = load_records(cli.input.as_ref())?;

    let inventory = Inventory::with_threshold(InMemoryProductStore::new(), cli.threshold);
    for record in records {
        let product = Product::new(
            ProductId::new(),
            record.sku,
            record.name,
            record.unit_price,
            record.quantity,
        )?;
        inventory.add_product(product)?;
    }

    tracing::info!(
        products = inventory.product_count(),
        threshold = inventory.reorder_threshold(),
        "inventory loaded"
    );

    let report = ReportGenerator::new(&inventory).generate_full_report();
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");

    Ok(())
}
