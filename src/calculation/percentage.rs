//! Flat percentage-of-revenue pay for the `pct-40` and `pct-30` schemes.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::AuditStep;

/// Revenue share of the `pct-40` scheme.
pub const PCT_40_RATE: Decimal = Decimal::from_parts(40, 0, 0, false, 2);

/// Revenue share of the `pct-30` scheme, also the default fallback.
pub const PCT_30_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// The result of applying a revenue share.
#[derive(Debug, Clone)]
pub struct PercentagePayResult {
    /// `revenue × rate`.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Pays `rate` of `revenue`.
///
/// Fails with `CalculationError` if the product overflows.
///
/// # Examples
///
/// ```
/// use taxi_payroll::calculation::{calculate_percentage_pay, PCT_40_RATE};
/// use rust_decimal::Decimal;
///
/// let result = calculate_percentage_pay(Decimal::from(250), PCT_40_RATE, 1).unwrap();
/// assert_eq!(result.amount, Decimal::from(100));
/// ```
pub fn calculate_percentage_pay(
    revenue: Decimal,
    rate: Decimal,
    step_number: u32,
) -> PayrollResult<PercentagePayResult> {
    let amount = revenue
        .checked_mul(rate)
        .ok_or_else(|| PayrollError::CalculationError {
            message: format!("percentage pay overflowed: {} × {}", revenue, rate),
        })?;
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();

    let audit_step = AuditStep {
        step_number,
        rule_id: "percentage_pay".to_string(),
        rule_name: "Percentage of Revenue".to_string(),
        input: serde_json::json!({
            "revenue": revenue.normalize().to_string(),
            "rate": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{}% of {} revenue = {}",
            percent,
            revenue.normalize(),
            amount.normalize()
        ),
    };

    Ok(PercentagePayResult { amount, audit_step })
}
