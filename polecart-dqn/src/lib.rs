#![warn(missing_docs)]
//! A DQN agent without a learning backend.
//!
//! The agent couples a policy/target network pair behind the [`QNetwork`]
//! seam with epsilon-greedy exploration, Huber-shaped bootstrap targets and
//! an episode-scheduled target synchronization. [`LinearQNet`] is a small
//! reference implementation of [`QNetwork`] with hand-derived gradients;
//! anything heavier plugs in through the same trait.
pub mod dqn;

mod linear;
mod model;
mod types;

pub use linear::{LinearQNet, LinearQNetConfig};
pub use model::QNetwork;
pub use types::{DiscreteAct, VecObs};
