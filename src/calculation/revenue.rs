//! Trip revenue totalling.
//!
//! Percentage and tiered schemes are driven by the sum of fares over the
//! trips a driver logged in the period. Trip order is irrelevant.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, Trip};

/// The total fare revenue over a set of trips.
#[derive(Debug, Clone)]
pub struct RevenueResult {
    /// Sum of all fares.
    pub revenue: Decimal,
    /// Number of trips summed.
    pub trip_count: usize,
    /// The audit step recording this total.
    pub audit_step: AuditStep,
}

/// Sums the fares of `trips`.
///
/// An empty slice totals zero. Every trip is validated first, so a negative
/// fare fails with `InvalidTrip` instead of lowering the total.
///
/// # Examples
///
/// ```
/// use taxi_payroll::calculation::calculate_revenue;
/// use taxi_payroll::models::Trip;
/// use rust_decimal::Decimal;
///
/// let trips = vec![
///     Trip::new("trip_001", Decimal::from(100)),
///     Trip::new("trip_002", Decimal::from(120)),
/// ];
/// let result = calculate_revenue(&trips, 1).unwrap();
/// assert_eq!(result.revenue, Decimal::from(220));
/// assert_eq!(result.trip_count, 2);
/// ```
pub fn calculate_revenue(trips: &[Trip], step_number: u32) -> PayrollResult<RevenueResult> {
    let mut revenue = Decimal::ZERO;
    for trip in trips {
        trip.validate()?;
        revenue = revenue
            .checked_add(trip.fare)
            .ok_or_else(|| PayrollError::CalculationError {
                message: format!("revenue total overflowed at trip '{}'", trip.id),
            })?;
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "revenue_total".to_string(),
        rule_name: "Revenue Total".to_string(),
        input: serde_json::json!({
            "trip_count": trips.len()
        }),
        output: serde_json::json!({
            "revenue": revenue.normalize().to_string()
        }),
        reasoning: format!(
            "{} trips totalling {}",
            trips.len(),
            revenue.normalize()
        ),
    };

    Ok(RevenueResult {
        revenue,
        trip_count: trips.len(),
        audit_step,
    })
}
