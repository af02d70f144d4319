//! Reads the fields of JSON request bodies.

use axum::{Json, extract::rejection::JsonRejection};
use serde_json::{Map, Value};

use crate::{Error, money::parse_amount};

/// A JSON request body, or the reason axum could not read it.
///
/// Handlers take this instead of `Json<Value>` so that a bad body is reported
/// with the app's own error response.
pub type JsonBody = Result<Json<Value>, JsonRejection>;

/// The fields of a non-empty JSON object.
#[derive(Debug)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// Get the fields of a request body.
    ///
    /// # Errors
    ///
    /// Returns [Error::ValidationFailed] if the body could not be read, is not
    /// a JSON object or is an empty object.
    pub fn from_body(body: JsonBody) -> Result<Self, Error> {
        let Json(value) = body?;

        match value {
            Value::Object(fields) if !fields.is_empty() => Ok(Self(fields)),
            _ => Err(Error::ValidationFailed(
                "Request body cannot be empty.".to_owned(),
            )),
        }
    }

    /// Get a text field.
    ///
    /// # Errors
    ///
    /// Returns [Error::ValidationFailed] if the field is missing, null or not a string.
    pub fn text(&self, field: &str) -> Result<&str, Error> {
        match self.0.get(field) {
            None | Some(Value::Null) => Err(missing(field)),
            Some(Value::String(text)) => Ok(text),
            Some(value) => Err(Error::ValidationFailed(format!(
                "The {field} must be text, got {value}"
            ))),
        }
    }

    /// Get an amount of money.
    ///
    /// # Errors
    ///
    /// Returns [Error::ValidationFailed] if the field is missing, null or not a number.
    pub fn amount(&self, field: &str) -> Result<f64, Error> {
        match self.0.get(field) {
            None | Some(Value::Null) => Err(missing(field)),
            Some(value) => parse_amount(value, field),
        }
    }
}

fn missing(field: &str) -> Error {
    Error::ValidationFailed(format!("The {field} is missing"))
}
