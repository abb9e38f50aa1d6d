//! Configuration types for the salary rule table.
//!
//! This module contains the strongly-typed rule structures, the
//! [`RuleTable`] they are assembled into, and the raw shape deserialized
//! from `schemes.yaml`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    FIXED_HOURLY_RATE, HOURLY_10_RATE, HOURLY_12_RATE, PCT_30_RATE, PCT_40_RATE,
    TIERED_LOWER_RATE, TIERED_THRESHOLD, TIERED_UPPER_RATE,
};
use crate::error::{PayrollError, PayrollResult};
use crate::models::RemunerationScheme;

/// How a salary rule turns revenue or time into an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PricingStrategy {
    /// A rate per elapsed hour of service.
    Hourly {
        /// Currency units per hour.
        rate: Decimal,
    },
    /// A flat share of total trip revenue.
    Percentage {
        /// Share of revenue, between 0 and 1.
        rate: Decimal,
    },
    /// A marginal two-band share of revenue.
    Tiered {
        /// Revenue up to which `lower_rate` applies.
        threshold: Decimal,
        /// Share applied to revenue up to the threshold.
        lower_rate: Decimal,
        /// Share applied to revenue above the threshold.
        upper_rate: Decimal,
    },
}

/// A salary rule: a label and the strategy it selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRule {
    /// Description shown on payslips and route sheets.
    pub label: String,
    /// The pricing strategy.
    pub strategy: PricingStrategy,
}

impl SalaryRule {
    fn new(label: &str, strategy: PricingStrategy) -> Self {
        Self {
            label: label.to_string(),
            strategy,
        }
    }

    /// Checks the strategy parameters are in range.
    pub fn validate(&self, scheme: &str) -> PayrollResult<()> {
        let invalid = |message: String| PayrollError::InvalidRule {
            scheme: scheme.to_string(),
            message,
        };
        let is_share = |rate: Decimal| rate >= Decimal::ZERO && rate <= Decimal::ONE;

        match self.strategy {
            PricingStrategy::Hourly { rate } => {
                if rate < Decimal::ZERO {
                    return Err(invalid(format!("hourly rate cannot be negative (got {})", rate)));
                }
            }
            PricingStrategy::Percentage { rate } => {
                if !is_share(rate) {
                    return Err(invalid(format!("rate must be between 0 and 1 (got {})", rate)));
                }
            }
            PricingStrategy::Tiered {
                threshold,
                lower_rate,
                upper_rate,
            } => {
                if threshold < Decimal::ZERO {
                    return Err(invalid(format!(
                        "threshold cannot be negative (got {})",
                        threshold
                    )));
                }
                if !is_share(lower_rate) || !is_share(upper_rate) {
                    return Err(invalid(format!(
                        "rates must be between 0 and 1 (got {} and {})",
                        lower_rate, upper_rate
                    )));
                }
            }
        }

        if self.label.trim().is_empty() {
            return Err(invalid("label cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Raw structure of `schemes.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemesConfig {
    /// Map of scheme code to rule.
    pub rules: HashMap<String, SalaryRule>,
    /// The code whose rule applies to unrecognized schemes.
    pub fallback: String,
}

/// The complete salary rule table.
///
/// Holds one rule per known scheme and the rule applied to unrecognized
/// scheme codes. Lookups match exhaustively on [`RemunerationScheme`], so
/// adding a scheme variant without a rule is a compile error.
///
/// # Example
///
/// ```
/// use taxi_payroll::config::{PricingStrategy, RuleTable};
/// use taxi_payroll::models::RemunerationScheme;
/// use rust_decimal::Decimal;
///
/// let table = RuleTable::default();
/// let rule = table.rule_for(&RemunerationScheme::Hourly12);
/// assert_eq!(rule.strategy, PricingStrategy::Hourly { rate: Decimal::from(12) });
///
/// let bogus = RemunerationScheme::from_code("bogus");
/// assert_eq!(table.applied_scheme(&bogus), RemunerationScheme::Pct30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    fixed: SalaryRule,
    pct_40: SalaryRule,
    pct_30: SalaryRule,
    tiered_40_30: SalaryRule,
    hourly_10: SalaryRule,
    hourly_12: SalaryRule,
    fallback_scheme: RemunerationScheme,
}

impl RuleTable {
    /// Builds a rule table from raw configuration.
    ///
    /// Every known scheme must have a rule, every rule must validate, and the
    /// fallback must name a known scheme. Rules for unknown codes are rejected
    /// so a typo in the file cannot silently go unused.
    pub fn from_config(config: SchemesConfig) -> PayrollResult<Self> {
        let mut rules = config.rules;

        if let Some(code) = rules
            .keys()
            .find(|code| !RemunerationScheme::from_code(code).is_recognized())
        {
            return Err(PayrollError::InvalidRule {
                scheme: code.clone(),
                message: "not a known scheme code".to_string(),
            });
        }

        let mut take = |scheme: RemunerationScheme| -> PayrollResult<SalaryRule> {
            let rule = rules
                .remove(scheme.code())
                .ok_or_else(|| PayrollError::InvalidRule {
                    scheme: scheme.code().to_string(),
                    message: "no rule configured".to_string(),
                })?;
            rule.validate(scheme.code())?;
            Ok(rule)
        };

        let fixed = take(RemunerationScheme::Fixed)?;
        let pct_40 = take(RemunerationScheme::Pct40)?;
        let pct_30 = take(RemunerationScheme::Pct30)?;
        let tiered_40_30 = take(RemunerationScheme::TieredFortyThirty)?;
        let hourly_10 = take(RemunerationScheme::Hourly10)?;
        let hourly_12 = take(RemunerationScheme::Hourly12)?;

        let fallback_scheme = RemunerationScheme::from_code(&config.fallback);
        if !fallback_scheme.is_recognized() {
            return Err(PayrollError::InvalidRule {
                scheme: config.fallback,
                message: "fallback must name a known scheme".to_string(),
            });
        }

        Ok(Self {
            fixed,
            pct_40,
            pct_30,
            tiered_40_30,
            hourly_10,
            hourly_12,
            fallback_scheme,
        })
    }

    /// Returns the rule applied for a scheme.
    ///
    /// Unrecognized codes resolve to the fallback scheme's rule.
    pub fn rule_for(&self, scheme: &RemunerationScheme) -> &SalaryRule {
        match scheme {
            RemunerationScheme::Fixed => &self.fixed,
            RemunerationScheme::Pct40 => &self.pct_40,
            RemunerationScheme::Pct30 => &self.pct_30,
            RemunerationScheme::TieredFortyThirty => &self.tiered_40_30,
            RemunerationScheme::Hourly10 => &self.hourly_10,
            RemunerationScheme::Hourly12 => &self.hourly_12,
            RemunerationScheme::Unrecognized(_) => self.rule_for(&self.fallback_scheme),
        }
    }

    /// Returns the scheme whose rule is applied for `scheme`.
    pub fn applied_scheme(&self, scheme: &RemunerationScheme) -> RemunerationScheme {
        match scheme {
            RemunerationScheme::Unrecognized(_) => self.fallback_scheme.clone(),
            known => known.clone(),
        }
    }

    /// Returns the scheme applied to unrecognized codes.
    pub fn fallback_scheme(&self) -> &RemunerationScheme {
        &self.fallback_scheme
    }
}

impl Default for RuleTable {
    /// The standard fleet rules.
    fn default() -> Self {
        Self {
            fixed: SalaryRule::new(
                "fixed: 10/h",
                PricingStrategy::Hourly {
                    rate: FIXED_HOURLY_RATE,
                },
            ),
            pct_40: SalaryRule::new(
                "40% of revenue",
                PricingStrategy::Percentage { rate: PCT_40_RATE },
            ),
            pct_30: SalaryRule::new(
                "30% of revenue",
                PricingStrategy::Percentage { rate: PCT_30_RATE },
            ),
            tiered_40_30: SalaryRule::new(
                "tiered: 40% up to 180 then 30%",
                PricingStrategy::Tiered {
                    threshold: TIERED_THRESHOLD,
                    lower_rate: TIERED_LOWER_RATE,
                    upper_rate: TIERED_UPPER_RATE,
                },
            ),
            hourly_10: SalaryRule::new(
                "hourly: 10/h",
                PricingStrategy::Hourly {
                    rate: HOURLY_10_RATE,
                },
            ),
            hourly_12: SalaryRule::new(
                "hourly: 12/h",
                PricingStrategy::Hourly {
                    rate: HOURLY_12_RATE,
                },
            ),
            fallback_scheme: RemunerationScheme::Pct30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn default_config() -> SchemesConfig {
        let table = RuleTable::default();
        let rules = RemunerationScheme::KNOWN
            .iter()
            .map(|s| (s.code().to_string(), table.rule_for(s).clone()))
            .collect();
        SchemesConfig {
            rules,
            fallback: "pct-30".to_string(),
        }
    }

    #[test]
    fn test_default_table_matches_standard_rates() {
        let table = RuleTable::default();

        assert_eq!(
            table.rule_for(&RemunerationScheme::Fixed).strategy,
            PricingStrategy::Hourly { rate: dec("10") }
        );
        assert_eq!(
            table.rule_for(&RemunerationScheme::Pct40).strategy,
            PricingStrategy::Percentage { rate: dec("0.40") }
        );
        assert_eq!(
            table.rule_for(&RemunerationScheme::Pct30).strategy,
            PricingStrategy::Percentage { rate: dec("0.30") }
        );
        assert_eq!(
            table.rule_for(&RemunerationScheme::TieredFortyThirty).strategy,
            PricingStrategy::Tiered {
                threshold: dec("180"),
                lower_rate: dec("0.40"),
                upper_rate: dec("0.30"),
            }
        );
        assert_eq!(
            table.rule_for(&RemunerationScheme::Hourly10).strategy,
            PricingStrategy::Hourly { rate: dec("10") }
        );
        assert_eq!(
            table.rule_for(&RemunerationScheme::Hourly12).strategy,
            PricingStrategy::Hourly { rate: dec("12") }
        );
    }

    #[test]
    fn test_fixed_and_hourly_10_share_a_strategy() {
        let table = RuleTable::default();
        assert_eq!(
            table.rule_for(&RemunerationScheme::Fixed).strategy,
            table.rule_for(&RemunerationScheme::Hourly10).strategy
        );
        assert_ne!(
            table.rule_for(&RemunerationScheme::Fixed).label,
            table.rule_for(&RemunerationScheme::Hourly10).label
        );
    }

    #[test]
    fn test_unrecognized_resolves_to_fallback_rule() {
        let table = RuleTable::default();
        let bogus = RemunerationScheme::from_code("bogus");

        assert_eq!(
            table.rule_for(&bogus),
            table.rule_for(&RemunerationScheme::Pct30)
        );
        assert_eq!(table.applied_scheme(&bogus), RemunerationScheme::Pct30);
        assert_eq!(
            table.applied_scheme(&RemunerationScheme::Pct40),
            RemunerationScheme::Pct40
        );
    }

    #[test]
    fn test_from_config_round_trips_default() {
        let table = RuleTable::from_config(default_config()).unwrap();
        assert_eq!(table, RuleTable::default());
    }

    #[test]
    fn test_from_config_missing_rule_is_rejected() {
        let mut config = default_config();
        config.rules.remove("hourly-12");

        match RuleTable::from_config(config) {
            Err(PayrollError::InvalidRule { scheme, message }) => {
                assert_eq!(scheme, "hourly-12");
                assert!(message.contains("no rule"));
            }
            other => panic!("Expected InvalidRule, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_unknown_code_is_rejected() {
        let mut config = default_config();
        config.rules.insert(
            "pct-50".to_string(),
            SalaryRule::new("50%", PricingStrategy::Percentage { rate: dec("0.5") }),
        );

        match RuleTable::from_config(config) {
            Err(PayrollError::InvalidRule { scheme, .. }) => assert_eq!(scheme, "pct-50"),
            other => panic!("Expected InvalidRule, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_unknown_fallback_is_rejected() {
        let mut config = default_config();
        config.fallback = "bogus".to_string();

        match RuleTable::from_config(config) {
            Err(PayrollError::InvalidRule { scheme, message }) => {
                assert_eq!(scheme, "bogus");
                assert!(message.contains("fallback"));
            }
            other => panic!("Expected InvalidRule, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_custom_fallback() {
        let mut config = default_config();
        config.fallback = "pct-40".to_string();

        let table = RuleTable::from_config(config).unwrap();
        assert_eq!(
            table.applied_scheme(&RemunerationScheme::from_code("bogus")),
            RemunerationScheme::Pct40
        );
    }

    #[test]
    fn test_validate_rejects_percentage_above_one() {
        let rule = SalaryRule::new("too much", PricingStrategy::Percentage { rate: dec("1.2") });
        assert!(rule.validate("pct-40").is_err());
    }

    #[test]
    fn test_validate_rejects_negative_hourly_rate() {
        let rule = SalaryRule::new("negative", PricingStrategy::Hourly { rate: dec("-1") });
        assert!(rule.validate("fixed").is_err());
    }

    #[test]
    fn test_validate_rejects_negative_threshold() {
        let rule = SalaryRule::new(
            "tiered",
            PricingStrategy::Tiered {
                threshold: dec("-5"),
                lower_rate: dec("0.4"),
                upper_rate: dec("0.3"),
            },
        );
        assert!(rule.validate("tiered-40-30").is_err());
    }

    #[test]
    fn test_validate_rejects_blank_label() {
        let rule = SalaryRule::new("  ", PricingStrategy::Percentage { rate: dec("0.3") });
        assert!(rule.validate("pct-30").is_err());
    }

    #[test]
    fn test_strategy_deserializes_from_tagged_yaml() {
        let yaml = r#"
type: tiered
threshold: "180"
lower_rate: "0.40"
upper_rate: "0.30"
"#;
        let strategy: PricingStrategy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            strategy,
            PricingStrategy::Tiered {
                threshold: dec("180"),
                lower_rate: dec("0.40"),
                upper_rate: dec("0.30"),
            }
        );
    }
}
