//! Salary rule engine for taxi fleet drivers.
//!
//! This crate computes what a driver is owed for a service period from the
//! remuneration scheme assigned to them, the trips they logged, and the
//! period boundaries taken from their route sheet.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
