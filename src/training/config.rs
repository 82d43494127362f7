use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::network::check_learning_rate;

/// Hyperparameters of the epoch loop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Epochs per call to `run`
    pub max_epochs: usize,
    pub learning_rate: f64,
    /// Log progress at `info` level every this many epochs, `0` disables it
    #[serde(default = "default_log_interval")]
    pub log_interval: usize,
}

fn default_log_interval() -> usize {
    100
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            max_epochs: 1000,
            learning_rate: 0.1,
            log_interval: default_log_interval(),
        }
    }
}

impl TrainerConfig {
    pub fn new(max_epochs: usize, learning_rate: f64) -> Self {
        TrainerConfig {
            max_epochs,
            learning_rate,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_epochs == 0 {
            return Err(NetworkError::invalid_parameter("max_epochs", "must be at least 1"));
        }
        check_learning_rate(self.learning_rate)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: TrainerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
