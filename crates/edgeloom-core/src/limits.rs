//! Record shape limits for resource protection

use crate::error::RecordError;

/// Maximum length of a single resource line (64KB)
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Minimum tokens in an edge record (two endpoints)
pub const MIN_RECORD_TOKENS: usize = 2;

/// Maximum tokens in an edge record (two endpoints and an attribute)
pub const MAX_RECORD_TOKENS: usize = 3;

/// Validate raw line length
pub fn validate_line_len(line: &str) -> Result<(), RecordError> {
    if line.len() > MAX_LINE_LEN {
        return Err(RecordError::LineTooLong {
            len: line.len(),
            max: MAX_LINE_LEN,
        });
    }
    Ok(())
}

/// Validate the number of tokens in a record
pub fn validate_token_count(found: usize) -> Result<(), RecordError> {
    if found < MIN_RECORD_TOKENS {
        return Err(RecordError::TooFewTokens {
            found,
            min: MIN_RECORD_TOKENS,
        });
    }
    if found > MAX_RECORD_TOKENS {
        return Err(RecordError::TooManyTokens {
            found,
            max: MAX_RECORD_TOKENS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_line_len() {
        assert!(validate_line_len("A B 5").is_ok());
        assert!(validate_line_len(&"x".repeat(100_000)).is_err());
    }

    #[test]
    fn test_validate_token_count() {
        assert!(validate_token_count(2).is_ok());
        assert!(validate_token_count(3).is_ok());
        assert_eq!(
            validate_token_count(1),
            Err(RecordError::TooFewTokens { found: 1, min: 2 })
        );
        assert_eq!(
            validate_token_count(4),
            Err(RecordError::TooManyTokens { found: 4, max: 3 })
        );
    }
}
