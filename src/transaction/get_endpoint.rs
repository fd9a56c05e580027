//! Defines the endpoints for reading transactions.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{
        Transaction,
        core::{get_transaction, list_transactions},
        parse_transaction_id,
        state::TransactionState,
    },
};

/// A route handler for listing every transaction in the order they were created.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let transactions = list_transactions(&*state.connection()?)?;

    Ok(Json(transactions))
}

/// A route handler for getting a transaction by its database ID.
///
/// This function will return the status code 404 if the requested resource does not exist (e.g., not created yet)
/// or if the ID in the path is not an integer.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<Transaction>, Error> {
    let transaction_id = parse_transaction_id(path)?;
    let transaction = get_transaction(transaction_id, &*state.connection()?)?;

    Ok(Json(transaction))
}
