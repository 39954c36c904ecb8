//! Fill every feature field at once from a comma-separated line.

use crate::features::{FeatureField, WineFeatures};

/// Separator between values in the bulk input line.
pub const BULK_INPUT_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BulkInputError {
    #[error("Bulk input must contain {expected} comma-separated values.")]
    WrongCount { expected: usize, found: usize },
}

/// Split `text` on commas and map the trimmed tokens positionally onto the
/// feature fields.
///
/// Tokens are not checked for being numeric.
pub fn parse_bulk_input(text: &str) -> Result<WineFeatures, BulkInputError> {
    let tokens: Vec<String> = text
        .split(BULK_INPUT_SEPARATOR)
        .map(|token| token.trim().to_string())
        .collect();
    let found = tokens.len();
    let values: [String; FeatureField::COUNT] =
        tokens.try_into().map_err(|_| BulkInputError::WrongCount {
            expected: FeatureField::COUNT,
            found,
        })?;
    Ok(WineFeatures::from_values(values))
}
