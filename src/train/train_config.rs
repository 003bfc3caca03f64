use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`   — total number of full passes over the training data
/// - `log_interval` — an `EpochStats` is recorded and logged every this many
///                    epochs, plus once for the final epoch
/// - `seed`         — optional seed for weight initialization, for library
///                    callers that build with `Network::with_seed`; the
///                    `xornet` binary always seeds from entropy
///
/// Missing JSON fields fall back to [`TrainConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub iterations: usize,
    pub log_interval: usize,
    pub seed: Option<u64>,
}

impl TrainConfig {
    pub fn new(iterations: usize, log_interval: usize) -> Self {
        TrainConfig {
            iterations,
            log_interval,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_interval == 0 {
            return Err(Error::Config("log_interval must be at least 1".into()));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<TrainConfig> {
        let config: TrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(20_000, 2_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config = TrainConfig::from_json_str(r#"{"iterations": 500, "seed": 7}"#).unwrap();
        assert_eq!(config, TrainConfig { iterations: 500, log_interval: 2_000, seed: Some(7) });
    }

    #[test]
    fn zero_log_interval_is_rejected() {
        let err = TrainConfig::from_json_str(r#"{"log_interval": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(TrainConfig::from_json_str("iterations"), Err(Error::Json(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = TrainConfig::load_json("/nonexistent/xornet/config.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
