//! Configuration of [`Dqn`](super::Dqn).
use super::EpsilonGreedyConfig;
use anyhow::Result;
use polecart_core::PolecartError;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Dqn`](super::Dqn).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct DqnConfig {
    /// Discount factor of the bootstrap target.
    pub discount_factor: f32,

    /// Number of transitions per optimization step.
    pub batch_size: usize,

    /// Minimum number of stored transitions before optimization starts.
    pub min_transitions_warmup: usize,

    /// Configuration of the epsilon-greedy explorer.
    pub explorer: EpsilonGreedyConfig,

    /// Initial target synchronization interval in episodes.
    ///
    /// A negative value synchronizes every episode.
    pub sync_interval: i64,

    /// Decay step of the synchronization interval.
    pub sync_interval_decay: i64,
}

impl Default for DqnConfig {
    fn default() -> Self {
        Self {
            discount_factor: 0.99,
            batch_size: 32,
            min_transitions_warmup: 100,
            explorer: EpsilonGreedyConfig::default(),
            sync_interval: 10,
            sync_interval_decay: 0,
        }
    }
}

impl DqnConfig {
    /// Sets the discount factor.
    pub fn discount_factor(mut self, v: f32) -> Self {
        self.discount_factor = v;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the warm-up threshold in transitions.
    pub fn min_transitions_warmup(mut self, v: usize) -> Self {
        self.min_transitions_warmup = v;
        self
    }

    /// Sets the explorer configuration.
    pub fn explorer(mut self, v: EpsilonGreedyConfig) -> Self {
        self.explorer = v;
        self
    }

    /// Sets the initial target synchronization interval in episodes.
    pub fn sync_interval(mut self, v: i64) -> Self {
        self.sync_interval = v;
        self
    }

    /// Sets the decay step of the synchronization interval.
    pub fn sync_interval_decay(mut self, v: i64) -> Self {
        self.sync_interval_decay = v;
        self
    }

    /// Checks the configuration.
    pub fn check(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(PolecartError::Config("batch size must be positive".into()).into());
        }
        if !(0.0..=1.0).contains(&self.discount_factor) {
            return Err(
                PolecartError::Config("discount factor must be in [0, 1]".into()).into(),
            );
        }
        self.explorer.check()
    }

    /// Loads the configuration from the YAML file at the given path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        Ok(serde_yaml::from_reader(rdr)?)
    }

    /// Saves the configuration as a YAML file at the given path.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(self)?.as_bytes())?;
        Ok(())
    }
}
