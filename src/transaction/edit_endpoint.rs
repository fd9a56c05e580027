//! Defines the endpoint for replacing a transaction.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{
        MessageResponse,
        core::update_transaction,
        form::{TransactionForm, parse_json_body},
        parse_transaction_id,
        state::TransactionState,
    },
};

/// A route handler for overwriting every field of a transaction.
///
/// The payload is checked the same way as for creating a transaction, so an
/// update cannot store a row that could not have been created.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    path: Result<Path<TransactionId>, PathRejection>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Json<MessageResponse>, Error> {
    let transaction_id = parse_transaction_id(path)?;
    let builder = parse_json_body(payload)?.validate()?;

    update_transaction(transaction_id, builder, &*state.connection()?).inspect_err(|error| {
        tracing::debug!("Could not update transaction {transaction_id}: {error}");
    })?;

    Ok(Json(MessageResponse::new(
        "Transaction updated successfully.",
    )))
}
