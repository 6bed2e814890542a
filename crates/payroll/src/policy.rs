//! Payroll policy: thresholds, rates and the royal surname set.

use serde::{Deserialize, Serialize};

use bytebank_core::{DomainError, DomainResult};

/// Surnames that make a high earner eligible for the salary decrease.
pub const ROYAL_SURNAMES: [&str; 5] = ["Bragança", "Windsor", "Bourbon", "Yamato", "Ptolomeu"];

/// Configurable payroll rules.
///
/// `PayrollPolicy::default()` carries the standard rules; a custom policy can be
/// loaded from JSON, where any missing field keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollPolicy {
    /// Surnames eligible for the salary decrease (exact, case-sensitive match).
    pub royal_surnames: Vec<String>,
    /// Minimum salary (inclusive) at which the decrease applies.
    pub decrease_threshold: f64,
    /// Fraction of the current salary removed per applied decrease.
    pub decrease_rate: f64,
    /// Fraction of the salary paid as bonus.
    pub bonus_rate: f64,
    /// A raw bonus above this value is suppressed to zero.
    pub bonus_cap: f64,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            royal_surnames: ROYAL_SURNAMES.iter().map(|s| s.to_string()).collect(),
            decrease_threshold: 100_000.0,
            decrease_rate: 0.1,
            bonus_rate: 0.1,
            bonus_cap: 1_000.0,
        }
    }
}

impl PayrollPolicy {
    /// Load a policy from a JSON document and validate it.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let policy: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("payroll policy: {e}")))?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(0.0..=1.0).contains(&self.decrease_rate) {
            return Err(DomainError::validation(
                "decrease_rate must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.bonus_rate) {
            return Err(DomainError::validation("bonus_rate must be between 0 and 1"));
        }
        if self.decrease_threshold.is_nan() || self.decrease_threshold < 0.0 {
            return Err(DomainError::validation(
                "decrease_threshold cannot be negative",
            ));
        }
        if self.bonus_cap.is_nan() || self.bonus_cap < 0.0 {
            return Err(DomainError::validation("bonus_cap cannot be negative"));
        }
        Ok(())
    }

    pub fn is_royal(&self, surname: &str) -> bool {
        self.royal_surnames.iter().any(|s| s == surname)
    }
}
