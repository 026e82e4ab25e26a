use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request data rejected field by field.
///
/// Each rejected field is reported under the key `<field>_valid` with a human-readable
/// reason, next to an overall `message`.
///
/// # Example
///
/// ```rust,ignore
/// let mut errors = ValidationError::new("Invalid reservation data");
/// if amount_people <= 0 {
///     errors.add("amount_people", "Amount of people must be greater than 0");
/// }
/// errors.into_result()?;
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl ValidationError {
    /// Creates an empty error with the given summary message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Creates an error for a single rejected field, using the reason as summary.
    pub fn field(field: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let mut error = Self::new(reason.clone());
        error.add(field, reason);
        error
    }

    pub fn add(&mut self, field: &str, reason: impl Into<String>) {
        self.fields.insert(format!("{field}_valid"), reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the reason recorded for `field`, if any.
    pub fn reason(&self, field: &str) -> Option<&str> {
        self.fields.get(&format!("{field}_valid")).map(String::as_str)
    }

    /// `Ok(())` when no field was rejected.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_dto(self) -> ErrorDto {
        ErrorDto {
            error: self.message,
            fields: self.fields,
        }
    }
}
