//! Error types for noise configuration

use std::fmt;

/// Errors that can occur while building noise configurations
///
/// The sampling functions themselves never fail; only the validated
/// configuration layer produces errors.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// A wrap period is not usable with the selected wrap mode
    InvalidWrap {
        /// Axis the period belongs to ('x', 'y' or 'z')
        axis: char,
        /// The rejected period
        period: i32,
    },
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            NoiseError::InvalidWrap { axis, period } => {
                write!(f, "invalid wrap period {} on {} axis", period, axis)
            }
        }
    }
}

impl std::error::Error for NoiseError {}

/// Result type alias for noise configuration
pub type Result<T> = std::result::Result<T, NoiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = NoiseError::InvalidWrap { axis: 'y', period: 3 };
        assert_eq!(err.to_string(), "invalid wrap period 3 on y axis");

        let err = NoiseError::InvalidConfig("octaves must be <= 64 (got 65)".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: octaves must be <= 64 (got 65)"
        );
    }
}
