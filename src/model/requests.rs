/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    OBJCODE_GROUP, OBJCODE_PROJECT, OBJCODE_TASK, PARAM_FIELDS, PARAM_METHOD, PARAM_SESSION_ID,
    RESERVED_PARAMS,
};
use crate::error::AppError;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Code identifying a server resource type
///
/// The server is authoritative on which codes exist; any string converts into an
/// `ObjCode` and the three common ones are provided as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjCode(Cow<'static, str>);

impl ObjCode {
    /// Groups
    pub const GROUP: ObjCode = ObjCode(Cow::Borrowed(OBJCODE_GROUP));
    /// Projects
    pub const PROJECT: ObjCode = ObjCode(Cow::Borrowed(OBJCODE_PROJECT));
    /// Tasks
    pub const TASK: ObjCode = ObjCode(Cow::Borrowed(OBJCODE_TASK));

    /// Returns the code as sent on the wire
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObjCode {
    fn from(code: &str) -> Self {
        ObjCode(Cow::Owned(code.to_string()))
    }
}

impl From<String> for ObjCode {
    fn from(code: String) -> Self {
        ObjCode(Cow::Owned(code))
    }
}

impl AsRef<str> for ObjCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ObjCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic HTTP method, sent in the `method` form field
///
/// The transport verb is always `POST`; the server dispatches on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalMethod {
    /// Read
    Get,
    /// Create
    Post,
    /// Update
    Put,
    /// Delete
    Delete,
}

impl LogicalMethod {
    /// Upper-case name as transmitted
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalMethod::Get => "GET",
            LogicalMethod::Post => "POST",
            LogicalMethod::Put => "PUT",
            LogicalMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for LogicalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request parameters: string keys mapped to string values
///
/// Values are accepted through [`ToString`], so numbers and booleans are coerced
/// the same way the form encoder would print them. Keys are kept sorted, which
/// makes the encoded body deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Creates an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter and returns the previous value for that key
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    /// Value for `key`, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds parameters from a JSON object
    ///
    /// String values are taken verbatim; `null` becomes an empty string and every
    /// other value is rendered as compact JSON (`true`, `42`, `[1,2]`).
    pub fn from_json(value: &Value) -> Result<Self, AppError> {
        let obj = value.as_object().ok_or_else(|| {
            AppError::InvalidInput(format!("expected a JSON object, got {value}"))
        })?;
        Ok(obj
            .iter()
            .map(|(k, v)| {
                let v = match v {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (k.clone(), v)
            })
            .collect())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: ToString, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Builds the form sent to the server for one call
///
/// Starts from a copy of `params` and injects `method`, `sessionID` (empty when
/// there is no session) and, for a non-empty `fields` list, `fields` joined with
/// commas. Caller values for these keys are replaced; a caller `fields` value is
/// dropped when the field list is empty.
pub fn build_form(
    params: Option<&Params>,
    method: LogicalMethod,
    session_id: Option<&str>,
    fields: &[&str],
) -> Params {
    let mut form = params.cloned().unwrap_or_default();

    for key in RESERVED_PARAMS {
        if form.contains_key(key) {
            warn!("Caller parameter '{}' is reserved and was replaced", key);
        }
    }
    form.0.remove(PARAM_FIELDS);
    form.insert(PARAM_METHOD, method.as_str());
    form.insert(PARAM_SESSION_ID, session_id.unwrap_or_default());
    if !fields.is_empty() {
        form.insert(PARAM_FIELDS, fields.join(","));
    }
    form
}
