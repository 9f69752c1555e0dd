use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::engine::budget::Budget;

/// Settings for a finder session, read from `fastfood-finder.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Budget shown when the session starts
    pub initial_budget: u32,

    /// Amount added or removed per adjustment
    pub budget_step: u32,

    /// How long "Finding meals..." spins before results appear
    pub spin_delay_ms: u64,

    /// Delay between revealing consecutive results
    pub reveal_interval_ms: u64,

    /// Prefix used when printing amounts
    pub currency: String,

    /// Catalog file to use instead of the built-in stores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            initial_budget: Budget::DEFAULT,
            budget_step: Budget::STEP,
            spin_delay_ms: 1500,
            reveal_interval_ms: 100,
            currency: "R".to_string(),
            catalog: None,
        }
    }
}

impl FinderConfig {
    pub fn spin_delay(&self) -> Duration {
        Duration::from_millis(self.spin_delay_ms)
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    pub fn initial_budget(&self) -> Budget {
        Budget::new(self.initial_budget)
    }
}
