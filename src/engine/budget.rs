use crate::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount available to spend on a round of meals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget(u32);

impl Budget {
    /// Searches below this amount are rejected; adjustments never go under it
    pub const MIN: u32 = 30;
    pub const DEFAULT: u32 = 200;
    pub const STEP: u32 = 10;

    /// Wrap a raw amount. Values under [`Budget::MIN`] are kept as-is so the
    /// too-low rejection can still be reported.
    pub fn new(amount: u32) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> u32 {
        self.0
    }

    /// Apply a signed change, clamped to the floor
    pub fn adjust(self, delta: i64) -> Self {
        let next = (i64::from(self.0) + delta).clamp(i64::from(Self::MIN), i64::from(u32::MAX));
        Self(next as u32)
    }

    /// Raise the amount to the floor if needed
    pub fn floored(self) -> Self {
        Self(self.0.max(Self::MIN))
    }

    pub fn meets_minimum(self) -> bool {
        self.0 >= Self::MIN
    }

    /// Guard used before every search
    pub fn ensure_minimum(self) -> Result<()> {
        if self.meets_minimum() {
            Ok(())
        } else {
            Err(FinderError::BudgetTooLow {
                budget: self.0,
                minimum: Self::MIN,
            })
        }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Budget {
    type Err = FinderError;

    /// Accepts `150`, ` 150 `, `R150` and `r 150`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('R')
            .or_else(|| trimmed.strip_prefix('r'))
            .unwrap_or(trimmed)
            .trim();

        digits
            .parse::<u32>()
            .map(Budget)
            .map_err(|_| FinderError::InvalidBudget(format!("'{}' is not a whole amount", s.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_respects_floor() {
        assert_eq!(Budget::new(200).adjust(10).amount(), 210);
        assert_eq!(Budget::new(200).adjust(-10).amount(), 190);
        assert_eq!(Budget::new(35).adjust(-10).amount(), 30);
        assert_eq!(Budget::new(30).adjust(-10).amount(), 30);
        // Below-floor budgets snap up on any adjustment
        assert_eq!(Budget::new(5).adjust(10).amount(), 30);
    }

    #[test]
    fn test_adjust_saturates_at_max() {
        assert_eq!(Budget::new(u32::MAX).adjust(10).amount(), u32::MAX);
    }

    #[test]
    fn test_minimum_guard() {
        assert!(Budget::new(30).ensure_minimum().is_ok());
        let err = Budget::new(29).ensure_minimum().unwrap_err();
        assert!(matches!(err, FinderError::BudgetTooLow { budget: 29, minimum: 30 }));
        assert_eq!(
            err.to_string(),
            "Your budget is too low for any meal. Please increase it."
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("150".parse::<Budget>().unwrap(), Budget::new(150));
        assert_eq!(" R120 ".parse::<Budget>().unwrap(), Budget::new(120));
        assert_eq!("r 90".parse::<Budget>().unwrap(), Budget::new(90));
        assert!("abc".parse::<Budget>().is_err());
        assert!("-10".parse::<Budget>().is_err());
        assert!("".parse::<Budget>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Budget::default().amount(), 200);
        assert_eq!(Budget::new(12).floored().amount(), 30);
    }
}
