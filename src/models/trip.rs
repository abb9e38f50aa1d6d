//! Trip model.
//!
//! A trip ("course") is a single logged ride. Only the fare collected from
//! the passenger matters to the salary rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Represents a single logged ride.
///
/// # Examples
///
/// ```
/// use taxi_payroll::models::Trip;
/// use rust_decimal::Decimal;
///
/// let trip = Trip::new("trip_001", Decimal::new(4550, 2));
/// assert_eq!(trip.fare, Decimal::new(4550, 2));
/// assert!(trip.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip.
    pub id: String,
    /// Amount collected from the passenger.
    pub fare: Decimal,
}

impl Trip {
    /// Creates a trip.
    pub fn new(id: impl Into<String>, fare: Decimal) -> Self {
        Self {
            id: id.into(),
            fare,
        }
    }

    /// Checks that the fare is non-negative.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.fare < Decimal::ZERO {
            return Err(PayrollError::InvalidTrip {
                trip_id: self.id.clone(),
                message: format!("fare cannot be negative (got {})", self.fare),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_fare_is_valid() {
        let trip = Trip::new("trip_001", Decimal::ZERO);
        assert!(trip.validate().is_ok());
    }

    #[test]
    fn test_negative_zero_fare_is_valid() {
        let trip = Trip::new("trip_001", dec("-0.00"));
        assert!(trip.validate().is_ok());
    }

    #[test]
    fn test_negative_fare_is_rejected() {
        let trip = Trip::new("trip_042", dec("-12.50"));

        match trip.validate() {
            Err(PayrollError::InvalidTrip { trip_id, message }) => {
                assert_eq!(trip_id, "trip_042");
                assert!(message.contains("-12.50"));
            }
            other => panic!("Expected InvalidTrip, got {:?}", other),
        }
    }

    #[test]
    fn test_trip_deserialization() {
        let json = r#"{ "id": "trip_001", "fare": "23.40" }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, "trip_001");
        assert_eq!(trip.fare, dec("23.40"));
    }

    #[test]
    fn test_trip_log_extra_fields_are_ignored() {
        let json = r#"{
            "id": "trip_002",
            "fare": "18",
            "started_at": "2026-03-02T09:15:00"
        }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip, Trip::new("trip_002", dec("18")));
    }
}
