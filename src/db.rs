//! Creates the schema for the application's database.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::transaction::create_transaction_table;

/// Create the tables for the domain models if they do not already exist.
///
/// All tables are created inside a single exclusive SQL transaction, so either
/// the whole schema is created or nothing is.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;
    create_category_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Create the category table.
///
/// Categories are not linked to transactions yet, which carry their category
/// as free text. The table is kept so that databases created now already have
/// it once categories are managed.
fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT NOT NULL CHECK(type IN ('income', 'expense'))
                )",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;
    use crate::{summarize, transaction::list_transactions};

    fn table_names(connection: &Connection) -> Vec<String> {
        connection
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|name| name.unwrap())
            .collect()
    }

    #[test]
    fn creates_transaction_and_category_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("could not initialize database");

        let names = table_names(&connection);
        assert!(names.contains(&"transactions".to_owned()), "got {names:?}");
        assert!(names.contains(&"categories".to_owned()), "got {names:?}");
    }

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
            .execute(
                "INSERT INTO transactions (type, category, amount, date) VALUES ('income', 'Salary', 10.0, '2025-01-01')",
                (),
            )
            .unwrap();

        initialize(&connection).expect("second initialize should succeed");

        let count: i64 = connection
            .query_row("SELECT COUNT(id) FROM transactions", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn existing_database_with_same_schema_is_reused() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute_batch(
                "CREATE TABLE transactions (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    type TEXT CHECK(type IN ('income', 'expense')) NOT NULL,
                    category TEXT NOT NULL,
                    amount REAL NOT NULL,
                    date TEXT NOT NULL,
                    description TEXT
                );
                INSERT INTO transactions (type, category, amount, date, description)
                    VALUES ('expense', 'Rent', 800.0, '2024-12-01', NULL);",
            )
            .unwrap();

        initialize(&connection).expect("could not initialize database");

        let transactions = list_transactions(&connection).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].category, "Rent");
        assert_eq!(summarize(&connection).unwrap().total_expenses, 800.0);
    }

    #[test]
    fn category_table_rejects_unknown_type() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        let result = connection.execute(
            "INSERT INTO categories (name, type) VALUES ('Gifts', 'transfer')",
            (),
        );

        assert!(result.is_err());
    }
}
