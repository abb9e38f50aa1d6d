//! Batch payroll runs.
//!
//! A run computes one payslip per driver input, in input order. Inputs are
//! independent of each other; the first one that fails aborts the run.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::RuleTable;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayrollInput, PayrollRun, Payslip, ServicePeriod};

use super::salary::calculate_salary;

/// Computes salaries for every input and totals them.
///
/// # Examples
///
/// ```
/// use taxi_payroll::calculation::run_payroll;
/// use taxi_payroll::config::RuleTable;
/// use taxi_payroll::models::{PayrollInput, RemunerationScheme};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let parse = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let inputs = vec![PayrollInput {
///     driver_id: "drv_001".to_string(),
///     scheme: RemunerationScheme::Fixed,
///     trips: vec![],
///     period_start: parse("2026-03-02 08:00:00"),
///     period_end: parse("2026-03-02 16:00:00"),
/// }];
///
/// let run = run_payroll(&inputs, &RuleTable::default()).unwrap();
/// assert_eq!(run.total_amount, Decimal::from(80));
/// ```
pub fn run_payroll(inputs: &[PayrollInput], rules: &RuleTable) -> PayrollResult<PayrollRun> {
    let run_id = Uuid::new_v4();
    info!(run_id = %run_id, drivers = inputs.len(), "Starting payroll run");

    let mut payslips: Vec<Payslip> = Vec::with_capacity(inputs.len());
    let mut total_amount = Decimal::ZERO;

    for input in inputs {
        let salary = ServicePeriod::new(input.period_start, input.period_end)
            .and_then(|period| calculate_salary(&input.scheme, &input.trips, &period, rules))
            .inspect_err(|err| {
                warn!(
                    run_id = %run_id,
                    driver_id = %input.driver_id,
                    error = %err,
                    "Payroll run aborted"
                );
            })?;

        total_amount = total_amount
            .checked_add(salary.amount)
            .ok_or_else(|| PayrollError::CalculationError {
                message: format!("payroll total overflowed at driver '{}'", input.driver_id),
            })?;

        payslips.push(Payslip {
            driver_id: input.driver_id.clone(),
            trip_count: input.trips.len(),
            salary,
        });
    }

    info!(
        run_id = %run_id,
        drivers = payslips.len(),
        total_amount = %total_amount,
        "Payroll run completed"
    );

    Ok(PayrollRun {
        run_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        payslips,
        total_amount,
    })
}
