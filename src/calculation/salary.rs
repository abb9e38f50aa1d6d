//! Salary calculation.
//!
//! Resolves the driver's remuneration scheme against the rule table and runs
//! the selected pricing strategy over the trips and the service period.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{PricingStrategy, RuleTable};
use crate::error::PayrollResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, RemunerationScheme, SalaryResult, ServicePeriod, Trip,
};

use super::hourly::calculate_hourly_pay;
use super::percentage::calculate_percentage_pay;
use super::revenue::calculate_revenue;
use super::tiered::calculate_tiered_pay;

/// Warning code emitted when a scheme code falls back to the default rule.
pub const UNRECOGNIZED_SCHEME_WARNING: &str = "UNRECOGNIZED_SCHEME";

/// Computes a driver's salary with the standard fleet rules.
///
/// `scheme` accepts a code string or a [`RemunerationScheme`]. Unknown codes
/// are paid as `pct-30` and flagged in the audit trace.
///
/// # Errors
///
/// - `InvalidPeriod` if `period_end` is before `period_start`
/// - `InvalidTrip` if any trip has a negative fare
/// - `CalculationError` if an amount overflows
///
/// # Examples
///
/// ```
/// use taxi_payroll::calculation::compute_salary;
/// use taxi_payroll::models::Trip;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-03-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-02 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let trips = vec![
///     Trip::new("trip_001", Decimal::from(100)),
///     Trip::new("trip_002", Decimal::from(120)),
/// ];
///
/// let result = compute_salary("tiered-40-30", &trips, start, end).unwrap();
/// assert_eq!(result.amount, Decimal::from(84));
/// assert_eq!(result.scheme_label, "tiered: 40% up to 180 then 30%");
/// ```
pub fn compute_salary(
    scheme: impl Into<RemunerationScheme>,
    trips: &[Trip],
    period_start: NaiveDateTime,
    period_end: NaiveDateTime,
) -> PayrollResult<SalaryResult> {
    let period = ServicePeriod::new(period_start, period_end)?;
    calculate_salary(&scheme.into(), trips, &period, &RuleTable::default())
}

/// Computes a driver's salary against an explicit rule table.
///
/// The audit trace always holds, in order: the scheme resolution, the
/// revenue total, and the pricing step.
pub fn calculate_salary(
    scheme: &RemunerationScheme,
    trips: &[Trip],
    period: &ServicePeriod,
    rules: &RuleTable,
) -> PayrollResult<SalaryResult> {
    let mut steps: Vec<AuditStep> = Vec::with_capacity(3);
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let applied_scheme = rules.applied_scheme(scheme);
    let rule = rules.rule_for(scheme);

    if !scheme.is_recognized() {
        warn!(
            requested = %scheme,
            applied = %applied_scheme,
            "Unrecognized remuneration scheme, applying fallback rule"
        );
        warnings.push(AuditWarning {
            code: UNRECOGNIZED_SCHEME_WARNING.to_string(),
            message: format!(
                "Unknown scheme '{}' paid under '{}'",
                scheme, applied_scheme
            ),
            severity: "medium".to_string(),
        });
    }

    steps.push(AuditStep {
        step_number,
        rule_id: "scheme_resolution".to_string(),
        rule_name: "Scheme Resolution".to_string(),
        input: serde_json::json!({
            "scheme": scheme.code()
        }),
        output: serde_json::json!({
            "applied_scheme": applied_scheme.code(),
            "label": rule.label
        }),
        reasoning: if scheme.is_recognized() {
            format!("Scheme '{}' applies rule '{}'", scheme, rule.label)
        } else {
            format!(
                "Scheme '{}' is not recognized, falling back to '{}' ({})",
                scheme, applied_scheme, rule.label
            )
        },
    });
    step_number += 1;

    let revenue_result = calculate_revenue(trips, step_number)?;
    let revenue = revenue_result.revenue;
    steps.push(revenue_result.audit_step);
    step_number += 1;

    let (amount, hours, pricing_step): (Decimal, Option<Decimal>, AuditStep) =
        match rule.strategy {
            PricingStrategy::Hourly { rate } => {
                let result = calculate_hourly_pay(period, rate, step_number)?;
                (result.amount, Some(result.hours), result.audit_step)
            }
            PricingStrategy::Percentage { rate } => {
                let result = calculate_percentage_pay(revenue, rate, step_number)?;
                (result.amount, None, result.audit_step)
            }
            PricingStrategy::Tiered {
                threshold,
                lower_rate,
                upper_rate,
            } => {
                let result =
                    calculate_tiered_pay(revenue, threshold, lower_rate, upper_rate, step_number)?;
                (result.amount, None, result.audit_step)
            }
        };
    steps.push(pricing_step);

    debug!(
        scheme = %scheme,
        applied = %applied_scheme,
        trips = revenue_result.trip_count,
        revenue = %revenue,
        amount = %amount,
        "Salary calculated"
    );

    Ok(SalaryResult {
        amount,
        scheme_label: rule.label.clone(),
        requested_scheme: scheme.clone(),
        applied_scheme,
        revenue,
        hours,
        audit_trace: AuditTrace { steps, warnings },
    })
}
