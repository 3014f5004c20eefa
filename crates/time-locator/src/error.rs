//! Error types for time resolution.

use thiserror::Error;

/// Result type alias using TimeLocatorError.
pub type Result<T> = std::result::Result<T, TimeLocatorError>;

/// Query failures of the index-array backed time locators.
#[derive(Debug, Error, PartialEq)]
pub enum TimeLocatorError {
    /// The requested line or pixel has no entry in the raw time array.
    #[error("index {index} is out of bounds for raw time array of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    /// The stored raw value cannot be converted to a time.
    #[error("raw time value at index {index} is invalid: {value}")]
    InvalidRawValue { index: usize, value: String },
}

impl TimeLocatorError {
    /// Create an IndexOutOfBounds error.
    pub fn out_of_bounds(index: i64, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Create an InvalidRawValue error.
    pub fn invalid_raw_value(index: usize, value: impl ToString) -> Self {
        Self::InvalidRawValue {
            index,
            value: value.to_string(),
        }
    }

    /// Resolve `index` into a slice of length `len`.
    pub fn check_index(index: i64, len: usize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or_else(|| Self::out_of_bounds(index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert_eq!(TimeLocatorError::check_index(0, 3), Ok(0));
        assert_eq!(TimeLocatorError::check_index(2, 3), Ok(2));
        assert_eq!(
            TimeLocatorError::check_index(3, 3),
            Err(TimeLocatorError::out_of_bounds(3, 3))
        );
        assert_eq!(
            TimeLocatorError::check_index(-1, 3),
            Err(TimeLocatorError::out_of_bounds(-1, 3))
        );
    }

    #[test]
    fn test_error_message() {
        let err = TimeLocatorError::out_of_bounds(12, 10);
        assert_eq!(
            err.to_string(),
            "index 12 is out of bounds for raw time array of length 10"
        );
    }
}
