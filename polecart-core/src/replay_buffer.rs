//! Uniform experience replay.
//!
//! This module provides [`UniformReplayBuffer`], a fixed-capacity ring buffer
//! of [`Transition`]s with uniform random sampling without replacement, and
//! [`OneStepProcessor`], which turns environment steps into transitions by
//! pairing consecutive observations.
mod base;
mod batch;
mod config;
mod step_proc;
mod transition;

pub use base::UniformReplayBuffer;
pub use batch::TransitionBatch;
pub use config::UniformReplayBufferConfig;
pub use step_proc::{OneStepProcessor, OneStepProcessorConfig};
pub use transition::Transition;
