use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{
        MessageResponse, core::delete_transaction, parse_transaction_id, state::TransactionState,
    },
};

/// A route handler for deleting a transaction.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<MessageResponse>, Error> {
    let transaction_id = parse_transaction_id(path)?;
    delete_transaction(transaction_id, &*state.connection()?).inspect_err(|error| {
        tracing::debug!("Could not delete transaction {transaction_id}: {error}");
    })?;

    Ok(Json(MessageResponse::new(
        "Transaction deleted successfully.",
    )))
}
