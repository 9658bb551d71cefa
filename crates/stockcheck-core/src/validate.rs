//! Normalization of untrusted query parameters.

use thiserror::Error;

use crate::store::PostalCode;

/// Rejections of caller-supplied input. Each maps to a 400 response whose
/// message is the `Display` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("zip_code is required")]
    MissingPostalCode,

    #[error("zip_code must be 5, 9, or 10 characters")]
    PostalCodeLength,

    #[error("zip_code must be a number")]
    PostalCodeNotNumeric,

    #[error("sku {sku} is invalid - must be an integer")]
    InvalidSku { sku: String },
}

/// Normalizes a ZIP or ZIP+4 (`23223`, `232231234`, `23223-1234`) to its
/// 5-digit prefix.
///
/// # Errors
///
/// - [`ValidationError::PostalCodeLength`] unless the input is 5, 9, or 10
///   characters long.
/// - [`ValidationError::PostalCodeNotNumeric`] unless the first five
///   characters are ASCII digits.
pub fn normalize_postal_code(raw: &str) -> Result<PostalCode, ValidationError> {
    if !matches!(raw.chars().count(), 5 | 9 | 10) {
        return Err(ValidationError::PostalCodeLength);
    }

    let prefix: String = raw.chars().take(5).collect();
    if !prefix.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PostalCodeNotNumeric);
    }

    prefix
        .parse::<u32>()
        .map(PostalCode::from_digits)
        .map_err(|_| ValidationError::PostalCodeNotNumeric)
}

/// Splits a comma-delimited SKU list, keeping every token exactly as given.
///
/// Order and duplicates are preserved.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidSku`] naming the first token that is not
/// an integer literal. No partial list is returned.
pub fn normalize_product_ids(raw: &str) -> Result<Vec<String>, ValidationError> {
    raw.split(',')
        .map(|token| {
            if is_integer_literal(token) {
                Ok(token.to_string())
            } else {
                Err(ValidationError::InvalidSku {
                    sku: token.to_string(),
                })
            }
        })
        .collect()
}

/// Optional sign followed by at least one ASCII digit; surrounding whitespace
/// is ignored.
fn is_integer_literal(token: &str) -> bool {
    let trimmed = token.trim();
    let digits = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
