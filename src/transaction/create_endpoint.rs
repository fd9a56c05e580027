//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::TransactionId,
    endpoints::{self, format_endpoint},
    transaction::{
        core::create_transaction,
        form::{TransactionForm, parse_json_body},
        state::TransactionState,
    },
};

/// The response body for a newly created transaction.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedTransaction {
    /// The ID the database assigned to the transaction.
    pub id: TransactionId,
}

/// A route handler for creating a new transaction.
///
/// Responds with 201 Created, the new ID in the body and the URI of the
/// transaction in the `Location` header.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Response, Error> {
    let builder = parse_json_body(payload)?.validate().inspect_err(|error| {
        tracing::debug!("Rejected new transaction: {error}");
    })?;

    let transaction = create_transaction(builder, &*state.connection()?)?;
    let location = format_endpoint(endpoints::TRANSACTION, transaction.id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(CreatedTransaction { id: transaction.id }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::State,
        http::{StatusCode, header::LOCATION},
    };
    use rusqlite::Connection;

    use crate::{
        Error, initialize_db,
        transaction::{
            TransactionType, create_endpoint::create_transaction_endpoint, form::TransactionForm,
            get_transaction, list_transactions, state::TransactionState,
        },
    };

    fn must_create_state() -> TransactionState {
        let connection =
            Connection::open_in_memory().expect("could not create in-memory SQLite database");
        initialize_db(&connection).expect("could not initialize test DB");

        TransactionState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn creates_transaction() {
        let state = must_create_state();
        let form = TransactionForm {
            transaction_type: Some("income".to_owned()),
            category: Some("Salary".to_owned()),
            amount: Some(1000.0),
            date: Some("2025-05-01".to_owned()),
            description: None,
        };

        let response = create_transaction_endpoint(State(state.clone()), Ok(Json(form)))
            .await
            .expect("handler returned an error");

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/transactions/1");
        let transaction = get_transaction(1, &state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(transaction.transaction_type, TransactionType::Income);
        assert_eq!(transaction.category, "Salary");
        assert_eq!(transaction.amount, 1000.0);
        assert_eq!(transaction.date, "2025-05-01");
    }

    #[tokio::test]
    async fn rejects_missing_field_without_touching_database() {
        let state = must_create_state();
        let form = TransactionForm {
            transaction_type: Some("expense".to_owned()),
            category: Some("Rent".to_owned()),
            amount: None,
            date: Some("2025-05-01".to_owned()),
            description: None,
        };

        let result = create_transaction_endpoint(State(state.clone()), Ok(Json(form))).await;

        assert_eq!(result.err(), Some(Error::MissingField("amount")));
        assert!(
            list_transactions(&state.db_connection.lock().unwrap())
                .unwrap()
                .is_empty()
        );
    }
}
