//! Tiered commission for the `tiered-40-30` scheme.
//!
//! The rate bands are marginal: the first `threshold` of revenue is always
//! paid at the lower-band rate, and only the excess is paid at the
//! upper-band rate. The amount is therefore continuous at the threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};
use crate::models::AuditStep;

/// Revenue up to which the first band applies.
pub const TIERED_THRESHOLD: Decimal = Decimal::from_parts(180, 0, 0, false, 0);

/// Share of revenue paid in the first band.
pub const TIERED_LOWER_RATE: Decimal = Decimal::from_parts(40, 0, 0, false, 2);

/// Share of revenue paid above the threshold.
pub const TIERED_UPPER_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// The result of applying a two-band commission.
///
/// # Example
///
/// ```
/// use taxi_payroll::calculation::{
///     calculate_tiered_pay, TIERED_LOWER_RATE, TIERED_THRESHOLD, TIERED_UPPER_RATE,
/// };
/// use rust_decimal::Decimal;
///
/// let result = calculate_tiered_pay(
///     Decimal::from(220),
///     TIERED_THRESHOLD,
///     TIERED_LOWER_RATE,
///     TIERED_UPPER_RATE,
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.lower_band_amount, Decimal::from(72));
/// assert_eq!(result.upper_band_amount, Decimal::from(12));
/// assert_eq!(result.amount, Decimal::from(84));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredPayResult {
    /// Revenue falling in the first band.
    pub lower_band_revenue: Decimal,
    /// Revenue above the threshold.
    pub upper_band_revenue: Decimal,
    /// Pay from the first band.
    pub lower_band_amount: Decimal,
    /// Pay from the upper band.
    pub upper_band_amount: Decimal,
    /// Total pay.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Pays `lower_rate` on revenue up to `threshold` and `upper_rate` on the rest.
///
/// # Arguments
///
/// * `revenue` - Total trip revenue for the period
/// * `threshold` - Revenue at which the upper band starts
/// * `lower_rate` - Share applied to the first band
/// * `upper_rate` - Share applied above the threshold
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// `CalculationError` if a band amount or their sum overflows.
pub fn calculate_tiered_pay(
    revenue: Decimal,
    threshold: Decimal,
    lower_rate: Decimal,
    upper_rate: Decimal,
    step_number: u32,
) -> PayrollResult<TieredPayResult> {
    let overflow = || PayrollError::CalculationError {
        message: format!("tiered commission overflowed on revenue {}", revenue),
    };

    let lower_band_revenue = revenue.min(threshold);
    let upper_band_revenue = revenue
        .checked_sub(threshold)
        .ok_or_else(overflow)?
        .max(Decimal::ZERO);

    let lower_band_amount = lower_band_revenue
        .checked_mul(lower_rate)
        .ok_or_else(overflow)?;
    let upper_band_amount = upper_band_revenue
        .checked_mul(upper_rate)
        .ok_or_else(overflow)?;
    let amount = lower_band_amount
        .checked_add(upper_band_amount)
        .ok_or_else(overflow)?;

    let lower_percent = (lower_rate * Decimal::ONE_HUNDRED).normalize();
    let upper_percent = (upper_rate * Decimal::ONE_HUNDRED).normalize();

    let reasoning = if upper_band_revenue > Decimal::ZERO {
        format!(
            "{} revenue exceeds {} threshold: {}% × {} + {}% × {} = {}",
            revenue.normalize(),
            threshold.normalize(),
            lower_percent,
            lower_band_revenue.normalize(),
            upper_percent,
            upper_band_revenue.normalize(),
            amount.normalize()
        )
    } else {
        format!(
            "{} revenue within {} threshold: {}% × {} = {}",
            revenue.normalize(),
            threshold.normalize(),
            lower_percent,
            lower_band_revenue.normalize(),
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tiered_commission".to_string(),
        rule_name: "Tiered Commission".to_string(),
        input: serde_json::json!({
            "revenue": revenue.normalize().to_string(),
            "threshold": threshold.normalize().to_string(),
            "lower_rate": lower_rate.normalize().to_string(),
            "upper_rate": upper_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "lower_band_revenue": lower_band_revenue.normalize().to_string(),
            "upper_band_revenue": upper_band_revenue.normalize().to_string(),
            "lower_band_amount": lower_band_amount.normalize().to_string(),
            "upper_band_amount": upper_band_amount.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    Ok(TieredPayResult {
        lower_band_revenue,
        upper_band_revenue,
        lower_band_amount,
        upper_band_amount,
        amount,
        audit_step,
    })
}
