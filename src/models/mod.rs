//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod payroll;
mod salary_result;
mod scheme;
mod service_period;
mod trip;

pub use payroll::{PayrollInput, PayrollRun, Payslip};
pub use salary_result::{AuditStep, AuditTrace, AuditWarning, SalaryResult};
pub use scheme::RemunerationScheme;
pub use service_period::ServicePeriod;
pub use trip::Trip;
