//! DQN agent.
mod base;
mod config;
mod explorer;
mod loss;
mod sync;

pub use base::Dqn;
pub use config::DqnConfig;
pub use explorer::{EpsilonGreedy, EpsilonGreedyConfig};
pub use loss::{greedy_action, huber, huber_grad, td_targets};
pub use sync::SyncScheduler;
