//! Defines the core data models and database queries for transactions.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row, params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned, e.g. a salary payment.
    Income,
    /// Money that was spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// The string used for this type in the database and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidTransactionType(other.to_owned())),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// A free-form label such as "Groceries" or "Salary".
    pub category: String,
    /// The amount of money spent or earned, stored exactly as given.
    pub amount: f64,
    /// When the transaction happened, in whatever format the client uses.
    pub date: String,
    /// An optional text description of what the transaction was for.
    pub description: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        transaction_type: TransactionType,
        category: &str,
        amount: f64,
        date: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            transaction_type,
            category: category.to_owned(),
            amount,
            date: date.to_owned(),
            description: None,
        }
    }
}

/// The full state of a transaction, minus the ID assigned by the database.
///
/// Used both to create transactions and to overwrite existing ones.
///
/// # Examples
///
/// ```
/// use expense_tracker::{Transaction, TransactionType};
///
/// let coffee = Transaction::build(TransactionType::Expense, "Food", 4.5, "2025-01-15")
///     .description(Some("Flat white"));
///
/// assert_eq!(coffee.description.as_deref(), Some("Flat white"));
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether the transaction is income or an expense.
    pub transaction_type: TransactionType,

    /// A free-form, non-empty label, e.g. "Groceries", "Transport", "Rent".
    pub category: String,

    /// The monetary amount of the transaction.
    ///
    /// No sign convention is enforced: whether money was earned or spent is
    /// given by `transaction_type`, and the amount is stored as given.
    pub amount: f64,

    /// The non-empty date of the transaction.
    ///
    /// The format is up to the client and is not checked for calendar
    /// correctness.
    pub date: String,

    /// An optional human-readable description of the transaction.
    pub description: Option<String>,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    pub fn description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_owned);
        self
    }

    /// Check that the required text fields are not empty.
    ///
    /// # Errors
    /// Returns [Error::MissingField] naming the first empty field.
    pub fn check_required_fields(&self) -> Result<(), Error> {
        if self.category.trim().is_empty() {
            return Err(Error::MissingField("category"));
        }

        if self.date.trim().is_empty() {
            return Err(Error::MissingField("date"));
        }

        Ok(())
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database from a builder.
///
/// The ID is assigned by the database. IDs only ever increase and are never
/// reused, even after the transaction holding one is deleted.
///
/// # Errors
/// This function will return a:
/// - [Error::MissingField] if `category` or `date` is empty, without touching the database,
/// - or [Error::SqlError] if the database rejects the row or there is some other SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    builder.check_required_fields()?;

    let transaction = connection
        .prepare(
            "INSERT INTO transactions (type, category, amount, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, type, category, amount, date, description",
        )?
        .query_row(
            (
                builder.transaction_type,
                builder.category,
                builder.amount,
                builder.date,
                builder.description,
            ),
            map_transaction_row,
        )?;

    tracing::debug!("created transaction {}", transaction.id);

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM transactions WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve all transactions in the order they were created.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM transactions ORDER BY id ASC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Overwrite every field of the transaction `id` with `builder`.
///
/// # Errors
/// This function will return a:
/// - [Error::MissingField] if `category` or `date` is empty, without touching the database,
/// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if the database rejects the row or there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<(), Error> {
    builder.check_required_fields()?;

    let rows_affected = connection.execute(
        "UPDATE transactions
        SET \
            type = ?1, \
            category = ?2, \
            amount = ?3, \
            date = ?4, \
            description = ?5 \
        WHERE id = ?6;",
        params![
            builder.transaction_type,
            builder.category,
            builder.amount,
            builder.date,
            builder.description,
            id,
        ],
    )?;

    match rows_affected {
        0 => Err(Error::UpdateMissingTransaction),
        _ => Ok(()),
    }
}

/// Delete the transaction `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::DeleteMissingTransaction] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "DELETE FROM transactions WHERE id = :id",
        &[(":id", &id)],
    )?;

    match rows_affected {
        0 => Err(Error::DeleteMissingTransaction),
        _ => Ok(()),
    }
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL CHECK(type IN ('income', 'expense')),
                category TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT
                )",
        (),
    )?;

    // Summaries filter on type.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_type ON transactions(type);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;
    let description = row.get(5)?;

    Ok(Transaction {
        id,
        transaction_type,
        category,
        amount,
        date,
        description,
    })
}

// ============================================================================
// TESTS
// ============================================================================
