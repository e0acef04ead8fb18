//! Agent.
use super::{Env, Policy, ReplayBufferBase};
use crate::record::Record;
use anyhow::Result;
use std::path::Path;

/// Represents a trainable policy on an environment.
pub trait Agent<E: Env, R: ReplayBufferBase>: Policy<E> {
    /// Sets the policy to training mode.
    fn train(&mut self);

    /// Sets the policy to evaluation mode.
    fn eval(&mut self);

    /// Returns if it is in training mode.
    fn is_train(&self) -> bool;

    /// Performs an optimization step.
    ///
    /// `buffer` is a replay buffer from which a batch of transitions is
    /// sampled. Returns `Ok(None)` when the agent skips the step, typically
    /// because the buffer does not yet hold enough transitions.
    fn opt(&mut self, buffer: &mut R) -> Result<Option<Record>>;

    /// Called by the trainer after every episode.
    ///
    /// `episode` is 1-based. The default implementation does nothing; agents
    /// with episode-scheduled behavior, like target network synchronization,
    /// override it.
    fn on_episode_end(&mut self, episode: usize) -> Result<Record> {
        let _ = episode;
        Ok(Record::empty())
    }

    /// Saves the parameters of the agent in the given directory.
    ///
    /// This method commonly creates a number of files in the directory. The
    /// DQN agent in `polecart-dqn` saves two parameter files, one for the
    /// policy network and one for the target network.
    fn save_params(&self, path: &Path) -> Result<()>;

    /// Loads the parameters of the agent from the given directory.
    fn load_params(&mut self, path: &Path) -> Result<()>;
}
