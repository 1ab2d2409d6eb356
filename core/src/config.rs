//! Model configuration — the tuning knobs for a shop run.
//!
//! Loaded from a single JSON file and validated before the first day
//! runs. In tests, use `ShopConfig::default_test()`.

use serde::{Deserialize, Serialize};

use crate::clock::DaySchedule;
use crate::error::{SimError, SimResult};
use crate::pricing::MAX_PERCEPTION_THRESHOLD;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fraction of a price unit customers ignore: at 0.75, a shelf
    /// price of $4.75 still reads as $4.
    pub perception_threshold: f64,
    /// Baseline price sensitivity before the popularity multiplier.
    pub base_price_sensitivity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReputationConfig {
    /// Reputation the shop opens with on day one, in [0, 1].
    pub initial_reputation: f64,
    /// Scales the day's average experience into a reputation delta.
    pub daily_reputation_factor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Customer count forecast at reputation 0.
    pub min_clients: u32,
    /// Customer count forecast at reputation 1.
    pub max_clients: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    pub pricing: PricingConfig,
    pub reputation: ReputationConfig,
    pub forecast: ForecastConfig,
    pub schedule: DaySchedule,
}

impl ShopConfig {
    /// Load and validate a config file.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: ShopConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the model cannot give meaningful answers for.
    ///
    /// The numeric clamps downstream would silently absorb most of
    /// these; a bad config file should fail loudly before day one
    /// instead. Inverted `min_clients`/`max_clients` are deliberately
    /// NOT rejected — the forecast swaps them, and that swap is part
    /// of the contract.
    pub fn validate(&self) -> SimResult<()> {
        if !(0.0..=1.0).contains(&self.reputation.initial_reputation) {
            return Self::invalid("initial_reputation must be in [0, 1]");
        }
        if self.reputation.daily_reputation_factor < 0.0 {
            return Self::invalid("daily_reputation_factor must not be negative");
        }
        if !(0.0..=MAX_PERCEPTION_THRESHOLD).contains(&self.pricing.perception_threshold) {
            return Self::invalid("perception_threshold must be in [0, 0.99]");
        }
        if self.pricing.base_price_sensitivity < 0.0 {
            return Self::invalid("base_price_sensitivity must not be negative");
        }
        if self.schedule.day_duration_secs <= 0.0 {
            return Self::invalid("day_duration_secs must be positive");
        }
        if self.schedule.open_hour < 0.0 {
            return Self::invalid("open_hour must not be negative");
        }
        if self.schedule.close_hour < self.schedule.open_hour {
            return Self::invalid("close_hour must not precede open_hour");
        }
        Ok(())
    }

    fn invalid(reason: &str) -> SimResult<()> {
        Err(SimError::InvalidConfig {
            reason: reason.to_string(),
        })
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            pricing: PricingConfig {
                perception_threshold: 0.75,
                base_price_sensitivity: 1.5,
            },
            reputation: ReputationConfig {
                initial_reputation: 0.5,
                daily_reputation_factor: 0.1,
            },
            forecast: ForecastConfig {
                min_clients: 5,
                max_clients: 20,
            },
            schedule: DaySchedule {
                day_duration_secs: 600.0,
                open_hour: 9.0,
                close_hour: 21.0,
            },
        }
    }
}
