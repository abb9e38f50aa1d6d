//! Configuration loading and management for the payroll engine.
//!
//! This module provides the salary rule table and the loader that reads it
//! from YAML. The table built by [`RuleTable::default`] carries the standard
//! fleet rules and is what the plain calculation entry points use.
//!
//! # Example
//!
//! ```no_run
//! use taxi_payroll::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/remuneration").unwrap();
//! println!("Fallback scheme: {}", loader.rules().fallback_scheme());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PricingStrategy, RuleTable, SalaryRule, SchemesConfig};
