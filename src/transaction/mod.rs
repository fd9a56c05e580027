//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing, querying, updating and deleting transactions
//! - Route handlers for the `/transactions` endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod get_endpoint;
mod state;

use axum::extract::{Path, rejection::PathRejection};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::TransactionId};

pub use core::{
    Transaction, TransactionBuilder, TransactionType, create_transaction,
    create_transaction_table, delete_transaction, get_transaction, list_transactions,
    update_transaction,
};
pub use create_endpoint::{CreatedTransaction, create_transaction_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::TransactionForm;
pub use get_endpoint::{get_transaction_endpoint, list_transactions_endpoint};

/// The response body for requests that do not return a resource.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// A human-readable description of what happened.
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Unwrap a transaction ID from the URL path.
///
/// An ID that cannot be parsed cannot refer to a transaction, so it is
/// reported as [Error::NotFound].
pub(crate) fn parse_transaction_id(
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<TransactionId, Error> {
    match path {
        Ok(Path(transaction_id)) => Ok(transaction_id),
        Err(rejection) => {
            tracing::debug!("Invalid transaction ID: {}", rejection.body_text());
            Err(Error::NotFound)
        }
    }
}
