//! Embedding vector input validation and parsing.
//!
//! The dashboard accepts a raw embedding either as a JSON float array or as
//! free text pasted from elsewhere. Both paths funnel through the validators
//! here before scoring.

use crate::error::CoreError;

/// Maximum accepted embedding dimensionality.
pub const MAX_EMBEDDING_DIMENSION: usize = 2048;

/// Parse a free-text embedding into a float vector.
///
/// Values may be separated by commas, whitespace, or both. Rejects empty
/// input and any token that is not a finite number, naming the offending
/// token in the error.
pub fn parse_embedding(raw: &str) -> Result<Vec<f64>, CoreError> {
    let values: Vec<f64> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                CoreError::Validation(format!("Embedding value is not a number: '{token}'"))
            })
        })
        .collect::<Result<_, _>>()?;

    validate_embedding(&values)?;
    Ok(values)
}

/// Validate an embedding vector: non-empty, within the dimension cap, and
/// all values finite.
pub fn validate_embedding(values: &[f64]) -> Result<(), CoreError> {
    if values.is_empty() {
        return Err(CoreError::Validation(
            "Embedding must contain at least one value".to_string(),
        ));
    }
    if values.len() > MAX_EMBEDDING_DIMENSION {
        return Err(CoreError::Validation(format!(
            "Embedding has {} values, maximum is {MAX_EMBEDDING_DIMENSION}",
            values.len()
        )));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(CoreError::Validation(format!(
            "Embedding values must be finite, got {bad}"
        )));
    }
    Ok(())
}
