//! Tool argument validation
//!
//! MCP hosts hand tools an untyped JSON object. Servers validate that object
//! field by field and report *every* failure at once, so a caller can fix all
//! of its arguments in a single round trip:
//!
//! ```text
//! Invalid arguments: topic: Expected string, received number
//! ```

use serde_json::{Map, Value};
use std::fmt;

/// A single failed field in a tool argument object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path to the offending field (e.g. `topic` or `options.page`)
    pub path: String,
    /// Human readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The field was absent (or `null`)
    pub fn required(path: impl Into<String>) -> Self {
        Self::new(path, "Required")
    }

    /// The field was present with the wrong JSON type
    pub fn type_mismatch(path: impl Into<String>, expected: &str, received: &Value) -> Self {
        Self::new(
            path,
            format!("Expected {}, received {}", expected, json_type_name(received)),
        )
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Tool arguments failed validation
///
/// Displays as `Invalid arguments: <path>: <reason>, <path>: <reason>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid arguments: {}", join_errors(.errors))]
pub struct InvalidArguments {
    pub errors: Vec<FieldError>,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl InvalidArguments {
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// True if any failure is reported for `path`
    pub fn mentions(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

/// Name of a JSON value's type as reported in validation messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Collects field errors while pulling typed values out of an argument object
///
/// ```rust,ignore
/// let mut fields = ArgumentReader::new(&args);
/// let topic = fields.required_str("topic");
/// let query = fields.required_str("query");
/// fields.finish()?;
/// ```
pub struct ArgumentReader<'a> {
    object: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> ArgumentReader<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            errors: Vec::new(),
        }
    }

    /// Read a required string field, recording an error if absent or mistyped
    pub fn required_str(&mut self, field: &str) -> Option<String> {
        match self.object.get(field) {
            None | Some(Value::Null) => {
                self.errors.push(FieldError::required(field));
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.errors
                    .push(FieldError::type_mismatch(field, "string", other));
                None
            }
        }
    }

    /// Finish reading, failing if any field was invalid
    pub fn finish(self) -> Result<(), InvalidArguments> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(InvalidArguments {
                errors: self.errors,
            })
        }
    }
}

/// Borrow the argument object out of a raw JSON value
pub fn expect_object(value: &Value) -> Result<&Map<String, Value>, InvalidArguments> {
    value.as_object().ok_or_else(|| {
        InvalidArguments::single(FieldError::type_mismatch("", "object", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_required_str_present() {
        let args = object(json!({ "topic": "rust" }));
        let mut reader = ArgumentReader::new(&args);
        assert_eq!(reader.required_str("topic").as_deref(), Some("rust"));
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn test_required_str_wrong_type() {
        let args = object(json!({ "topic": 123 }));
        let mut reader = ArgumentReader::new(&args);
        assert!(reader.required_str("topic").is_none());

        let err = reader.finish().unwrap_err();
        assert!(err.mentions("topic"));
        assert_eq!(
            err.to_string(),
            "Invalid arguments: topic: Expected string, received number"
        );
    }

    #[test]
    fn test_missing_field_is_required() {
        let args = object(json!({}));
        let mut reader = ArgumentReader::new(&args);
        reader.required_str("topic");
        assert_eq!(
            reader.finish().unwrap_err().to_string(),
            "Invalid arguments: topic: Required"
        );
    }

    #[test]
    fn test_every_failure_is_listed() {
        let args = object(json!({ "topic": false, "query": null }));
        let mut reader = ArgumentReader::new(&args);
        reader.required_str("topic");
        reader.required_str("query");
        reader.required_str("region");

        let err = reader.finish().unwrap_err();
        assert_eq!(err.errors.len(), 3);
        assert_eq!(
            err.to_string(),
            "Invalid arguments: topic: Expected string, received boolean, \
             query: Required, region: Required"
        );
    }

    #[test]
    fn test_expect_object_rejects_array() {
        let err = expect_object(&json!(["rust"])).unwrap_err();
        assert!(err.to_string().contains("Expected object, received array"));
    }
}
