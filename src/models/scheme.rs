//! Remuneration scheme identifiers.
//!
//! A driver record carries a scheme code chosen from a fixed set. Each known
//! code maps to exactly one pricing strategy in the rule table. Codes outside
//! the set are kept as [`RemunerationScheme::Unrecognized`] so the rule table
//! can apply its fallback policy to them deliberately.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The remuneration scheme assigned to a driver.
///
/// Serializes as its code string. Deserialization never fails: any string
/// that is not a known code becomes [`RemunerationScheme::Unrecognized`].
///
/// # Example
///
/// ```
/// use taxi_payroll::models::RemunerationScheme;
///
/// assert_eq!(RemunerationScheme::from_code("pct-40"), RemunerationScheme::Pct40);
/// assert_eq!(
///     RemunerationScheme::from_code("bogus"),
///     RemunerationScheme::Unrecognized("bogus".to_string())
/// );
/// assert_eq!(RemunerationScheme::TieredFortyThirty.code(), "tiered-40-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RemunerationScheme {
    /// `fixed`: flat hourly rate.
    Fixed,
    /// `pct-40`: 40% of trip revenue.
    Pct40,
    /// `pct-30`: 30% of trip revenue.
    Pct30,
    /// `tiered-40-30`: 40% of revenue up to the threshold, 30% above it.
    TieredFortyThirty,
    /// `hourly-10`: 10 per hour.
    Hourly10,
    /// `hourly-12`: 12 per hour.
    Hourly12,
    /// Any code outside the known set. Resolved by the rule table's fallback.
    Unrecognized(String),
}

impl RemunerationScheme {
    /// Every known scheme, in declaration order.
    pub const KNOWN: [RemunerationScheme; 6] = [
        RemunerationScheme::Fixed,
        RemunerationScheme::Pct40,
        RemunerationScheme::Pct30,
        RemunerationScheme::TieredFortyThirty,
        RemunerationScheme::Hourly10,
        RemunerationScheme::Hourly12,
    ];

    /// Parses a scheme code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Self {
        match code {
            "fixed" => Self::Fixed,
            "pct-40" => Self::Pct40,
            "pct-30" => Self::Pct30,
            "tiered-40-30" => Self::TieredFortyThirty,
            "hourly-10" => Self::Hourly10,
            "hourly-12" => Self::Hourly12,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Returns the code string for this scheme.
    pub fn code(&self) -> &str {
        match self {
            Self::Fixed => "fixed",
            Self::Pct40 => "pct-40",
            Self::Pct30 => "pct-30",
            Self::TieredFortyThirty => "tiered-40-30",
            Self::Hourly10 => "hourly-10",
            Self::Hourly12 => "hourly-12",
            Self::Unrecognized(code) => code,
        }
    }

    /// Returns true if the code is one of the known schemes.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for RemunerationScheme {
    fn from(code: String) -> Self {
        match Self::from_code(&code) {
            Self::Unrecognized(_) => Self::Unrecognized(code),
            known => known,
        }
    }
}

impl From<&str> for RemunerationScheme {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl From<RemunerationScheme> for String {
    fn from(scheme: RemunerationScheme) -> Self {
        match scheme {
            RemunerationScheme::Unrecognized(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for RemunerationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
