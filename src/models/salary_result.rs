//! Salary result models for the payroll engine.
//!
//! This module contains the [`SalaryResult`] type returned by the salary
//! calculator, together with the audit structures that record how each
//! amount was reached.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::RemunerationScheme;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag inputs that did not stop the calculation but that a payroll
/// clerk should look at, such as a driver record with an unknown scheme code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The ordered record of how a salary was computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The salary owed to a driver for one service period.
///
/// `amount` is exact: percentages and fractional hours are not rounded.
/// Use [`SalaryResult::rounded_amount`] when the value is shown or paid out.
///
/// # Example
///
/// ```
/// use taxi_payroll::models::{AuditTrace, RemunerationScheme, SalaryResult};
/// use rust_decimal::Decimal;
///
/// let result = SalaryResult {
///     amount: Decimal::new(33335, 3),
///     scheme_label: "30% of revenue".to_string(),
///     requested_scheme: RemunerationScheme::Pct30,
///     applied_scheme: RemunerationScheme::Pct30,
///     revenue: Decimal::new(111116, 3),
///     hours: None,
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(result.rounded_amount(), Decimal::new(3334, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// The amount owed to the driver.
    pub amount: Decimal,
    /// Description of the scheme that was applied.
    pub scheme_label: String,
    /// The scheme code found on the driver record.
    pub requested_scheme: RemunerationScheme,
    /// The scheme whose rule was applied (differs only on fallback).
    pub applied_scheme: RemunerationScheme,
    /// Total fare revenue over the trips supplied.
    pub revenue: Decimal,
    /// Elapsed service hours, for time-based schemes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// Audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl SalaryResult {
    /// Returns the amount rounded to cents, midpoint away from zero.
    pub fn rounded_amount(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Returns true if the requested scheme was unknown and the fallback rule applied.
    pub fn used_fallback(&self) -> bool {
        !self.requested_scheme.is_recognized()
    }
}
