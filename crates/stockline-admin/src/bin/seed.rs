//! # Seed Data Generator
//!
//! Populates the database with demo catalog data for development.
//!
//! ## Usage
//! ```bash
//! # Generate the default 200 products
//! cargo run -p stockline-admin --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockline-admin --bin seed -- --count 500
//!
//! # Specify database path
//! cargo run -p stockline-admin --bin seed -- --db ./data/stockline.db
//! ```
//!
//! ## Generated Catalog
//! - A fixed set of brands (Nike, Adidas, Puma, ...)
//! - A fixed set of product types (Running Shoes, Sneakers, ...)
//! - Products as brand × model × size combinations, inserted through
//!   `CatalogService` so ids are allocated and names composed exactly like
//!   the admin panel does it

use std::env;

use tracing_subscriber::EnvFilter;

use stockline_admin::CatalogService;
use stockline_core::ProductInput;
use stockline_db::{Database, DbConfig};

/// Product models per type, priced in whole rupees (MRP, selling price).
const MODELS: &[(&str, &[(&str, i64, i64)])] = &[
    (
        "Running Shoes",
        &[
            ("Air Max", 12999, 9999),
            ("Pegasus 41", 11995, 10495),
            ("Ultraboost 22", 17999, 13999),
            ("Gel-Kayano", 15999, 12799),
            ("Fresh Foam 1080", 14999, 11999),
            ("Velocity Nitro", 10999, 8499),
        ],
    ),
    (
        "Sneakers",
        &[
            ("Court Vision", 5495, 4295),
            ("Stan Smith", 8999, 6999),
            ("Suede Classic", 6499, 4799),
            ("Club C 85", 7499, 5499),
            ("574", 8499, 6999),
        ],
    ),
    (
        "Sandals",
        &[
            ("Adilette", 2999, 1999),
            ("Leadcat", 2499, 1799),
            ("Benassi", 1995, 1495),
        ],
    ),
    (
        "Football Boots",
        &[
            ("Mercurial Vapor", 18995, 15995),
            ("Predator Edge", 16999, 13599),
            ("Future Z", 13999, 10999),
        ],
    ),
];

const BRANDS: &[&str] = &["Nike", "Adidas", "Puma", "Reebok", "New Balance", "Asics"];

const SIZES: &[&str] = &["UK 6", "UK 7", "UK 8", "UK 9", "UK 10", "UK 11"];

/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level, sqlx quiet
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = env::var("STOCKLINE_DB_PATH").unwrap_or_else(|_| "./stockline_dev.db".into());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockline Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./stockline_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockline Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let service = CatalogService::new(db.clone());

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing products
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Reference tables first - products denormalize these names
    println!();
    println!("Creating brands and types...");

    let mut brands = Vec::new();
    for name in BRANDS {
        brands.push(service.add_brand(name).await?);
    }

    let mut types = Vec::new();
    for (type_name, _) in MODELS {
        types.push(service.add_type(type_name).await?);
    }

    println!("  {} brands, {} types", brands.len(), types.len());

    // Generate products
    println!();
    println!("Generating products...");

    let mut generated = 0usize;
    let start = std::time::Instant::now();

    'outer: for (type_idx, (_, models)) in MODELS.iter().enumerate() {
        let ty = &types[type_idx];

        for (model_idx, (model, mrp_rupees, sp_rupees)) in models.iter().enumerate() {
            let brand = &brands[(type_idx + model_idx) % brands.len()];

            for (size_idx, size) in SIZES.iter().enumerate() {
                if generated >= count {
                    break 'outer;
                }

                let input = ProductInput {
                    base_label: model.to_string(),
                    brand_id: brand.id,
                    brand_name: brand.name.clone(),
                    type_id: ty.id,
                    type_name: ty.name.clone(),
                    image_url: None,
                    mrp_paise: mrp_rupees * 100,
                    sp_paise: sp_rupees * 100,
                    quantity: ((model_idx + size_idx) % 20) as i64,
                    size: Some(size.to_string()),
                };

                if let Err(e) = service.add_product(input).await {
                    eprintln!("Failed to insert {} {}: {}", brand.name, model, e);
                    continue;
                }

                generated += 1;

                if generated % 50 == 0 {
                    println!("  Generated {} products...", generated);
                }
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Seeded {} products in {:.2}s", generated, elapsed.as_secs_f64());
    println!();
    println!("Done! Run the admin panel against {}", db_path);

    Ok(())
}
