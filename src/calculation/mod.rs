//! Calculation logic for the payroll engine.
//!
//! This module contains the salary calculator and the pieces it dispatches
//! to: trip revenue totalling, hourly pay, flat percentage of revenue, and
//! tiered commission, plus batch payroll runs over several drivers.

mod hourly;
mod payroll_run;
mod percentage;
mod revenue;
mod salary;
mod tiered;

pub use hourly::{
    FIXED_HOURLY_RATE, HOURLY_10_RATE, HOURLY_12_RATE, HourlyPayResult, calculate_hourly_pay,
};
pub use payroll_run::run_payroll;
pub use percentage::{PCT_30_RATE, PCT_40_RATE, PercentagePayResult, calculate_percentage_pay};
pub use revenue::{RevenueResult, calculate_revenue};
pub use salary::{UNRECOGNIZED_SCHEME_WARNING, calculate_salary, compute_salary};
pub use tiered::{
    TIERED_LOWER_RATE, TIERED_THRESHOLD, TIERED_UPPER_RATE, TieredPayResult, calculate_tiered_pay,
};
