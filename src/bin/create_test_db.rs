use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use time::{Duration, OffsetDateTime};

use expense_tracker::{CategoryStore, Database, NewExpense, create_expense, seed_categories};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// How many sample expenses to create.
    #[arg(long, short, default_value_t = 40)]
    count: usize,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let database = Database::open(output_path)?;
    let category_store = database.category_store();
    let expense_store = database.expense_store();

    println!("Creating default categories...");
    let report = seed_categories(&category_store)?;
    println!("{}", report.message);

    println!("Creating {} sample expenses...", args.count);
    let categories = category_store.list()?;
    let timezone = expense_tracker::resolve_timezone("UTC")?;
    let today = OffsetDateTime::now_utc();

    for i in 0..args.count {
        let category = &categories[i % categories.len()];
        let amount = 5.0 + ((i * 37) % 200) as f64 + ((i * 13) % 100) as f64 / 100.0;

        create_expense(
            NewExpense {
                amount,
                category_id: category.id,
                date: today - Duration::days((i * 2) as i64),
                description: Some(format!("Sample {} expense #{}", category.name, i + 1)),
            },
            &category_store,
            &expense_store,
            timezone,
        )?;
    }

    drop(category_store);
    drop(expense_store);
    database.close()?;

    println!("Success!");

    Ok(())
}
