use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
///
/// `error` summarizes the failure. Validation failures additionally carry one entry per
/// rejected field, keyed `<field>_valid`, flattened into the same object:
///
/// ```json
/// { "error": "Invalid bill data", "amount_sufficient_valid": "Amount paid must be at least $110.00 MXN" }
/// ```
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: BTreeMap::new(),
        }
    }
}

/// Generic acknowledgement body for endpoints with nothing else to return.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageDto {
    pub message: String,
}

/// Distinguishes an explicit `null` from an omitted field when paired with `#[serde(default)]`
/// on an `Option<Option<T>>`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
