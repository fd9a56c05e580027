//! Totals of income and expenses computed from the stored transactions.
//!
//! Nothing derived is persisted: every summary is recomputed from the
//! transaction table when it is requested.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, app_state::lock_connection, transaction::TransactionType};

/// The running totals over all stored transactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of the amounts of all income transactions.
    pub total_income: f64,
    /// The sum of the amounts of all expense transactions.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub balance: f64,
}

impl Summary {
    fn new(total_income: f64, total_expenses: f64) -> Self {
        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}

/// Compute the total income, total expenses and balance.
///
/// The two totals are read with separate queries. A write that lands between
/// them may be counted in one total but not the other, so the summary is a
/// best-effort snapshot rather than a consistent one.
///
/// # Errors
/// This function will return a [Error::SqlError] if either query fails.
pub fn summarize(connection: &Connection) -> Result<Summary, Error> {
    let total_income = sum_amounts(TransactionType::Income, connection)?;
    let total_expenses = sum_amounts(TransactionType::Expense, connection)?;

    Ok(Summary::new(total_income, total_expenses))
}

/// Sum the amounts of every transaction of `transaction_type`, zero if there are none.
fn sum_amounts(transaction_type: TransactionType, connection: &Connection) -> Result<f64, Error> {
    let total: Option<f64> = connection
        .prepare("SELECT SUM(amount) FROM transactions WHERE type = :type")?
        .query_one(&[(":type", &transaction_type)], |row| row.get(0))?;

    Ok(total.unwrap_or(0.0))
}

/// The state needed to summarize transactions.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for the income, expenses and balance totals.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Summary>, Error> {
    let summary = summarize(&*lock_connection(&state.db_connection)?)?;

    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        Error, initialize_db,
        summary::{Summary, summarize},
        transaction::{
            Transaction, TransactionType, create_transaction, delete_transaction,
            update_transaction,
        },
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize_db(&conn).unwrap();
        conn
    }

    fn insert(transaction_type: TransactionType, amount: f64, conn: &Connection) -> Transaction {
        create_transaction(
            Transaction::build(transaction_type, "Test", amount, "2025-01-01"),
            conn,
        )
        .expect("could not create transaction")
    }

    #[test]
    fn empty_store_gives_zero_totals() {
        let conn = get_test_connection();

        let summary = summarize(&conn).expect("could not summarize");

        assert_eq!(
            summary,
            Summary {
                total_income: 0.0,
                total_expenses: 0.0,
                balance: 0.0
            }
        );
    }

    #[test]
    fn sums_income_and_expenses() {
        let conn = get_test_connection();
        insert(TransactionType::Income, 100.0, &conn);
        insert(TransactionType::Income, 50.0, &conn);
        insert(TransactionType::Expense, 30.0, &conn);

        let summary = summarize(&conn).expect("could not summarize");

        assert_eq!(
            summary,
            Summary {
                total_income: 150.0,
                total_expenses: 30.0,
                balance: 120.0
            }
        );
    }

    #[test]
    fn only_expenses_gives_negative_balance() {
        let conn = get_test_connection();
        insert(TransactionType::Expense, 40.0, &conn);

        let summary = summarize(&conn).unwrap();

        assert_eq!(summary, Summary::new(0.0, 40.0));
        assert_eq!(summary.balance, -40.0);
    }

    #[test]
    fn negative_amounts_are_summed_as_given() {
        let conn = get_test_connection();
        insert(TransactionType::Income, 100.0, &conn);
        insert(TransactionType::Income, -25.0, &conn);

        assert_eq!(summarize(&conn).unwrap().total_income, 75.0);
    }

    #[test]
    fn reflects_updates_and_deletes() {
        let conn = get_test_connection();
        let salary = insert(TransactionType::Income, 100.0, &conn);
        let rent = insert(TransactionType::Expense, 60.0, &conn);

        update_transaction(
            salary.id,
            Transaction::build(TransactionType::Expense, "Test", 100.0, "2025-01-01"),
            &conn,
        )
        .unwrap();
        delete_transaction(rent.id, &conn).unwrap();

        assert_eq!(summarize(&conn).unwrap(), Summary::new(0.0, 100.0));
    }

    #[test]
    fn fails_without_schema() {
        let conn = Connection::open_in_memory().unwrap();

        let result = summarize(&conn);

        assert!(matches!(result, Err(Error::SqlError(_))), "got {result:?}");
    }
}
