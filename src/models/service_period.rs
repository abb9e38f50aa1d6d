//! Service period model.
//!
//! This module contains the [`ServicePeriod`] type: the start and end of a
//! driver's shift as recorded on the route sheet.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

const NANOS_PER_HOUR: i64 = 3_600_000_000_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// The interval a driver was on service.
///
/// The end is guaranteed to be at or after the start: [`ServicePeriod::new`]
/// rejects inverted periods, and deserialization goes through the same check.
///
/// # Example
///
/// ```
/// use taxi_payroll::models::ServicePeriod;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-03-02 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-03-02 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let period = ServicePeriod::new(start, end).unwrap();
/// assert_eq!(period.elapsed_hours(), Decimal::from(8));
/// assert!(ServicePeriod::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawServicePeriod")]
pub struct ServicePeriod {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

#[derive(Deserialize)]
struct RawServicePeriod {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<RawServicePeriod> for ServicePeriod {
    type Error = PayrollError;

    fn try_from(raw: RawServicePeriod) -> PayrollResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl ServicePeriod {
    /// Creates a service period, rejecting one that ends before it starts.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> PayrollResult<Self> {
        if end < start {
            return Err(PayrollError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start of the period.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the end of the period.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the elapsed time in fractional hours.
    ///
    /// Never rounded, so 2h30 is exactly 2.5 and sub-second parts count.
    /// Periods too long for nanosecond precision fall back to milliseconds.
    pub fn elapsed_hours(&self) -> Decimal {
        let elapsed = self.end - self.start;
        match elapsed.num_nanoseconds() {
            Some(nanos) => Decimal::from(nanos) / Decimal::from(NANOS_PER_HOUR),
            None => Decimal::from(elapsed.num_milliseconds()) / Decimal::from(MILLIS_PER_HOUR),
        }
    }
}
