//! Time-based pay.
//!
//! The `fixed`, `hourly-10` and `hourly-12` schemes pay a rate per elapsed
//! hour of service and ignore trip revenue.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, ServicePeriod};

/// Hourly rate of the `fixed` scheme.
pub const FIXED_HOURLY_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Hourly rate of the `hourly-10` scheme. Same figure as `fixed`.
pub const HOURLY_10_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Hourly rate of the `hourly-12` scheme.
pub const HOURLY_12_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of applying an hourly rate to a service period.
#[derive(Debug, Clone)]
pub struct HourlyPayResult {
    /// Elapsed hours in the period, fractional.
    pub hours: Decimal,
    /// `hours × rate`.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Pays `rate` per elapsed hour of `period`.
///
/// Fails with `CalculationError` if `hours × rate` overflows.
///
/// # Examples
///
/// ```
/// use taxi_payroll::calculation::{calculate_hourly_pay, HOURLY_12_RATE};
/// use taxi_payroll::models::ServicePeriod;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-03-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-02 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let period = ServicePeriod::new(start, end).unwrap();
///
/// let result = calculate_hourly_pay(&period, HOURLY_12_RATE, 1).unwrap();
/// assert_eq!(result.amount, Decimal::from(30));
/// ```
pub fn calculate_hourly_pay(
    period: &ServicePeriod,
    rate: Decimal,
    step_number: u32,
) -> PayrollResult<HourlyPayResult> {
    let hours = period.elapsed_hours();
    let amount = hours
        .checked_mul(rate)
        .ok_or_else(|| PayrollError::CalculationError {
            message: format!("hourly pay overflowed: {} hours × {}/h", hours, rate),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_pay".to_string(),
        rule_name: "Hourly Pay".to_string(),
        input: serde_json::json!({
            "period_start": period.start().to_string(),
            "period_end": period.end().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "hours": hours.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{} hours × {}/h = {}",
            hours.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    };

    Ok(HourlyPayResult {
        hours,
        amount,
        audit_step,
    })
}
