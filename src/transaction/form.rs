//! The JSON payload used to create and update transactions.

use axum::{Json, extract::rejection::JsonRejection};
use serde::Deserialize;

use crate::{
    Error,
    transaction::core::{TransactionBuilder, TransactionType},
};

/// The request body for creating or updating a transaction.
///
/// Every field is optional at the parse level so that a missing field can be
/// reported by name instead of as a generic parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionForm {
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// A free-form label for the transaction.
    pub category: Option<String>,
    /// The amount of money spent or earned.
    pub amount: Option<f64>,
    /// When the transaction happened.
    pub date: Option<String>,
    /// Text detailing the transaction.
    pub description: Option<String>,
}

impl TransactionForm {
    /// Check the form and convert it into a [TransactionBuilder].
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::MissingField] if `type`, `category`, `amount` or `date` is missing or empty,
    /// - or [Error::InvalidTransactionType] if `type` is not "income" or "expense".
    pub fn validate(self) -> Result<TransactionBuilder, Error> {
        let transaction_type = self
            .transaction_type
            .filter(|transaction_type| !transaction_type.is_empty())
            .ok_or(Error::MissingField("type"))?;
        let category = self.category.ok_or(Error::MissingField("category"))?;
        let amount = self.amount.ok_or(Error::MissingField("amount"))?;
        let date = self.date.ok_or(Error::MissingField("date"))?;

        let builder = TransactionBuilder {
            transaction_type: transaction_type.parse::<TransactionType>()?,
            category,
            amount,
            date,
            description: self.description,
        };
        builder.check_required_fields()?;

        Ok(builder)
    }
}

/// Unwrap a JSON body, turning a rejected body into [Error::InvalidRequestBody].
pub(crate) fn parse_json_body(
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<TransactionForm, Error> {
    payload
        .map(|Json(form)| form)
        .map_err(|rejection| Error::InvalidRequestBody(rejection.body_text()))
}
