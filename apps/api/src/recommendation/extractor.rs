//! Recommendation Extractor: pulls a JSON array of recommendation objects out of
//! free-form model output.
//!
//! Models often wrap the array in prose or code fences, so a whole-text parse is
//! followed by a parse of the outermost `[` … `]` span.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("response contains no parsable JSON array")]
    NoJsonArray,

    #[error("response JSON is not an array")]
    NotAnArray,

    #[error("response array is empty")]
    EmptyArray,

    #[error("element {index} is not a recommendation object: {reason}")]
    InvalidElement { index: usize, reason: &'static str },
}

/// Extracts the array of raw recommendation objects and validates its shape.
pub fn extract_recommendations(text: &str) -> Result<Vec<Value>, ExtractionError> {
    let items = extract_json_array(text)?;
    validate_shape(&items)?;
    Ok(items)
}

/// Parses the whole text as JSON; on failure, parses the span from the first `[`
/// to the last `]` inclusive.
pub fn extract_json_array(text: &str) -> Result<Vec<Value>, ExtractionError> {
    let text = text.trim();

    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(_) => {
            let start = text.find('[').ok_or(ExtractionError::NoJsonArray)?;
            let end = text.rfind(']').ok_or(ExtractionError::NoJsonArray)?;
            if end < start {
                return Err(ExtractionError::NoJsonArray);
            }
            serde_json::from_str::<Value>(&text[start..=end])
                .map_err(|_| ExtractionError::NoJsonArray)?
        }
    };

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(ExtractionError::NotAnArray),
    }
}

/// Rejects arrays that parsed but do not look like recommendations: every element
/// must be an object with a non-empty string `title`.
pub fn validate_shape(items: &[Value]) -> Result<(), ExtractionError> {
    if items.is_empty() {
        return Err(ExtractionError::EmptyArray);
    }
    for (index, item) in items.iter().enumerate() {
        let object = item.as_object().ok_or(ExtractionError::InvalidElement {
            index,
            reason: "not an object",
        })?;
        let has_title = object
            .get("title")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.trim().is_empty());
        if !has_title {
            return Err(ExtractionError::InvalidElement {
                index,
                reason: "missing title",
            });
        }
    }
    Ok(())
}
