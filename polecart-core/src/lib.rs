#![warn(missing_docs)]
//! Core components of the polecart reinforcement learning experiment.
//!
//! The crate defines the seams between a DQN-style agent and its external
//! collaborators: the simulated environment ([`Env`]), the trainable policy
//! ([`Agent`]) and experience storage ([`ReplayBufferBase`]). It also ships
//! the concrete pieces that do not depend on any learning backend: the
//! uniform replay buffer, the episode-driven [`Trainer`], evaluation and
//! metric recording.
pub mod error;
pub mod record;
pub mod replay_buffer;

mod base;
pub use base::{
    Act, ActionId, Agent, Env, ExperienceBufferBase, Info, Obs, Policy, ReplayBufferBase, Step,
    StepProcessor,
};
pub use error::PolecartError;

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};

mod trainer;
pub use trainer::{Trainer, TrainerConfig};
