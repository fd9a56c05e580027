use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{Transaction, TransactionType, create_transaction, initialize_db, summarize};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions...");

    let transactions = [
        (TransactionType::Income, "Salary", 4200.0, "2025-01-01", Some("January pay")),
        (TransactionType::Expense, "Rent", 1600.0, "2025-01-02", None),
        (TransactionType::Expense, "Groceries", 184.35, "2025-01-05", Some("Weekly shop")),
        (TransactionType::Expense, "Transport", 60.0, "2025-01-06", Some("Bus pass")),
        (TransactionType::Income, "Gift", 50.0, "2025-01-10", None),
        (TransactionType::Expense, "Dining", 72.9, "2025-01-12", Some("Dinner with friends")),
    ];

    for (transaction_type, category, amount, date, description) in transactions {
        create_transaction(
            Transaction::build(transaction_type, category, amount, date).description(description),
            &conn,
        )?;
    }

    let summary = summarize(&conn)?;
    println!(
        "Success! Income: {:.2}, expenses: {:.2}, balance: {:.2}",
        summary.total_income, summary.total_expenses, summary.balance
    );

    Ok(())
}
