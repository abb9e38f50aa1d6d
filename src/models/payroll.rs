//! Payroll run models.
//!
//! A payroll run computes salaries for several drivers at once, one
//! [`PayrollInput`] per driver, and collects the resulting [`Payslip`]s.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RemunerationScheme, SalaryResult, Trip};

/// Everything needed to compute one driver's salary for a service period.
///
/// The period bounds are kept raw here so an inverted period surfaces as an
/// `InvalidPeriod` error during the run rather than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Identifier of the driver.
    pub driver_id: String,
    /// The scheme code from the driver record.
    pub scheme: RemunerationScheme,
    /// The trips logged by the driver during the period.
    #[serde(default)]
    pub trips: Vec<Trip>,
    /// Start of service.
    pub period_start: NaiveDateTime,
    /// End of service.
    pub period_end: NaiveDateTime,
}

/// One driver's computed salary within a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// Identifier of the driver.
    pub driver_id: String,
    /// Number of trips that went into the calculation.
    pub trip_count: usize,
    /// The computed salary.
    pub salary: SalaryResult,
}

/// The result of computing salaries for a batch of drivers.
///
/// # Example
///
/// ```
/// use taxi_payroll::models::PayrollRun;
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let run = PayrollRun {
///     run_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     payslips: vec![],
///     total_amount: Decimal::ZERO,
/// };
/// assert!(run.payslip_for("drv_001").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// Payslips in the same order as the inputs.
    pub payslips: Vec<Payslip>,
    /// Sum of every payslip's exact amount.
    pub total_amount: Decimal,
}

impl PayrollRun {
    /// Finds the payslip for a driver.
    pub fn payslip_for(&self, driver_id: &str) -> Option<&Payslip> {
        self.payslips.iter().find(|p| p.driver_id == driver_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_input_deserialization() {
        let json = r#"{
            "driver_id": "drv_001",
            "scheme": "tiered-40-30",
            "trips": [
                { "id": "trip_001", "fare": "100" },
                { "id": "trip_002", "fare": "120" }
            ],
            "period_start": "2026-03-02T08:00:00",
            "period_end": "2026-03-02T16:00:00"
        }"#;

        let input: PayrollInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.driver_id, "drv_001");
        assert_eq!(input.scheme, RemunerationScheme::TieredFortyThirty);
        assert_eq!(input.trips.len(), 2);
    }

    #[test]
    fn test_payroll_input_trips_default_to_empty() {
        let json = r#"{
            "driver_id": "drv_002",
            "scheme": "fixed",
            "period_start": "2026-03-02T08:00:00",
            "period_end": "2026-03-02T16:00:00"
        }"#;

        let input: PayrollInput = serde_json::from_str(json).unwrap();
        assert!(input.trips.is_empty());
    }

    #[test]
    fn test_payroll_run_serialization() {
        let run = PayrollRun {
            run_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-03-31T18:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            payslips: vec![],
            total_amount: Decimal::ZERO,
        };

        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"run_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"payslips\":[]"));
    }
}
