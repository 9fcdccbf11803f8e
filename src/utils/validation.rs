//! Centralized validation of identifier input.

use crate::core::identifier::{Identifier, IdentifierError};

/// Maximum number of identifiers accepted in a single batch (DOS protection)
pub const MAX_IDENTIFIERS: usize = 1_000_000;

/// Maximum length in bytes of a single identifier
pub const MAX_IDENTIFIER_LENGTH: usize = 1024;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("Identifier exceeds {MAX_IDENTIFIER_LENGTH} bytes")]
    IdentifierTooLong,

    #[error("Line {line}: invalid identifier")]
    InvalidLine {
        line: usize,
        #[source]
        source: IdentifierError,
    },

    #[error("Line {line}: identifier exceeds {MAX_IDENTIFIER_LENGTH} bytes")]
    LineTooLong { line: usize },

    #[error("Too many identifiers: exceeds maximum of {MAX_IDENTIFIERS}")]
    TooManyIdentifiers,

    #[error("No identifiers provided")]
    NoIdentifiers,
}

/// Check that a complete batch is non-empty and within [`MAX_IDENTIFIERS`].
///
/// # Errors
///
/// Returns `ValidationError::NoIdentifiers` or `ValidationError::TooManyIdentifiers`.
pub fn check_batch_size(count: usize) -> Result<(), ValidationError> {
    check_batch_size_with_limit(count, MAX_IDENTIFIERS)
}

fn check_batch_size_with_limit(count: usize, limit: usize) -> Result<(), ValidationError> {
    if count == 0 {
        Err(ValidationError::NoIdentifiers)
    } else if count > limit {
        Err(ValidationError::TooManyIdentifiers)
    } else {
        Ok(())
    }
}

/// Parse a single CURIE, rejecting input longer than [`MAX_IDENTIFIER_LENGTH`] bytes.
///
/// # Errors
///
/// Returns `ValidationError::IdentifierTooLong` or `ValidationError::InvalidIdentifier`.
pub fn parse_identifier(text: &str) -> Result<Identifier, ValidationError> {
    if text.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::IdentifierTooLong);
    }
    Ok(text.parse()?)
}

/// Parse one CURIE per line.
///
/// Blank lines and lines starting with `#` are skipped. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Returns a `ValidationError` for the first malformed line, or if the number of
/// identifiers exceeds [`MAX_IDENTIFIERS`].
pub fn parse_identifier_lines(text: &str) -> Result<Vec<Identifier>, ValidationError> {
    parse_identifier_lines_with_limit(text, MAX_IDENTIFIERS)
}

fn parse_identifier_lines_with_limit(
    text: &str,
    limit: usize,
) -> Result<Vec<Identifier>, ValidationError> {
    let mut identifiers = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if identifiers.len() >= limit {
            return Err(ValidationError::TooManyIdentifiers);
        }

        let line = i + 1;
        let identifier = parse_identifier(trimmed).map_err(|e| match e {
            ValidationError::InvalidIdentifier(source) => {
                ValidationError::InvalidLine { line, source }
            }
            _ => ValidationError::LineTooLong { line },
        })?;
        identifiers.push(identifier);
    }

    Ok(identifiers)
}
