//! Error types for locator construction.

use thiserror::Error;

/// Result type alias using GeolocError.
pub type Result<T> = std::result::Result<T, GeolocError>;

/// Errors raised while building locators from raw reader arrays.
///
/// Queries never produce these: an unresolvable position is `None` or an
/// empty candidate list, not an error.
#[derive(Debug, Error, PartialEq)]
pub enum GeolocError {
    #[error("array '{name}' has {actual} elements, expected {expected}")]
    DimensionMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("axis '{0}' is empty")]
    EmptyAxis(String),

    #[error("invalid axis '{axis}': {message}")]
    InvalidAxis { axis: String, message: String },

    #[error("invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl GeolocError {
    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(name: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create an InvalidAxis error.
    pub fn invalid_axis(axis: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAxis {
            axis: axis.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Fail with DimensionMismatch unless `actual == expected`.
    pub fn check_len(name: &str, expected: usize, actual: usize) -> Result<()> {
        if actual != expected {
            return Err(Self::dimension_mismatch(name, expected, actual));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_len() {
        assert!(GeolocError::check_len("lon", 4, 4).is_ok());

        let err = GeolocError::check_len("lat", 4, 3).unwrap_err();
        assert_eq!(err, GeolocError::dimension_mismatch("lat", 4, 3));
        assert_eq!(err.to_string(), "array 'lat' has 3 elements, expected 4");
    }

    #[test]
    fn test_error_messages() {
        let err = GeolocError::invalid_axis("lon", "contains NaN");
        assert_eq!(err.to_string(), "invalid axis 'lon': contains NaN");

        let err = GeolocError::invalid_parameter("segment_height", "must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid parameter value for 'segment_height': must be > 0"
        );
    }
}
