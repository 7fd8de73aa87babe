/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// JSON envelope wrapping every Stream API response
///
/// The payload shape depends on the call: an object, a list of objects or a scalar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataEnvelope {
    /// Payload; `None` when the key is absent, `Some(Value::Null)` for `"data": null`
    #[serde(default, deserialize_with = "present")]
    pub data: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl DataEnvelope {
    /// Parses a raw response body and unwraps its `data` field
    ///
    /// A body that is not JSON yields [`AppError::Json`]; a JSON body that is not
    /// an object or has no top-level `data` key yields [`AppError::MissingData`].
    pub fn from_body(body: &str) -> Result<Value, AppError> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(AppError::MissingData);
        }
        let envelope: DataEnvelope = serde_json::from_value(value)?;
        envelope.data.ok_or(AppError::MissingData)
    }
}

/// Payload returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Session token for subsequent calls
    #[serde(rename = "sessionID")]
    pub session_id: String,
    /// Identifier of the authenticated user
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// Converts an unwrapped `data` value into a caller type
pub fn from_data<T: DeserializeOwned>(data: Value) -> Result<T, AppError> {
    serde_json::from_value(data).map_err(|e| AppError::Deserialization(e.to_string()))
}
