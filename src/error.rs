//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing driver salaries.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the calling layer.
///
/// # Example
///
/// ```
/// use taxi_payroll::error::PayrollError;
///
/// let error = PayrollError::ConfigNotFound {
///     path: "/missing/schemes.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schemes.yaml");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A salary rule in the rule table is missing or has out-of-range parameters.
    #[error("Invalid salary rule '{scheme}': {message}")]
    InvalidRule {
        /// The scheme code the rule belongs to.
        scheme: String,
        /// A description of what made the rule invalid.
        message: String,
    },

    /// The service period ends before it starts.
    #[error("Invalid service period: end {end} is before start {start}")]
    InvalidPeriod {
        /// The start of the period.
        start: NaiveDateTime,
        /// The end of the period.
        end: NaiveDateTime,
    },

    /// A trip record was invalid or contained inconsistent data.
    #[error("Invalid trip '{trip_id}': {message}")]
    InvalidTrip {
        /// The ID of the invalid trip.
        trip_id: String,
        /// A description of what made the trip invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/schemes.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/schemes.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rule_displays_scheme_and_message() {
        let error = PayrollError::InvalidRule {
            scheme: "pct-40".to_string(),
            message: "rate must be between 0 and 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid salary rule 'pct-40': rate must be between 0 and 1"
        );
    }

    #[test]
    fn test_invalid_period_displays_both_bounds() {
        let error = PayrollError::InvalidPeriod {
            start: make_datetime("2026-03-02 16:00:00"),
            end: make_datetime("2026-03-02 08:00:00"),
        };
        assert_eq!(
            error.to_string(),
            "Invalid service period: end 2026-03-02 08:00:00 is before start 2026-03-02 16:00:00"
        );
    }

    #[test]
    fn test_invalid_trip_displays_id_and_message() {
        let error = PayrollError::InvalidTrip {
            trip_id: "trip_007".to_string(),
            message: "fare cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid trip 'trip_007': fare cannot be negative"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = PayrollError::CalculationError {
            message: "revenue total overflowed".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: revenue total overflowed");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_trip() -> PayrollResult<()> {
            Err(PayrollError::InvalidTrip {
                trip_id: "trip_001".to_string(),
                message: "test".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_invalid_trip()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
