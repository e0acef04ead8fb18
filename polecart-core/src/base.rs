//! Core abstractions.
mod agent;
mod env;
mod policy;
mod replay_buffer;
mod step;
use std::fmt::Debug;

pub use agent::Agent;
pub use env::Env;
pub use policy::Policy;
pub use replay_buffer::{ExperienceBufferBase, ReplayBufferBase};
pub use step::{Info, Step, StepProcessor};

/// Index of a discrete action.
pub type ActionId = usize;

/// An observation of an environment.
///
/// For the pixel cart-pole experiment this is a preprocessed frame difference,
/// but the core components treat it as an opaque handle. Frame capture and
/// preprocessing happen inside the [`Env`] implementation.
pub trait Obs: Clone + Debug {}

/// An action of an environment.
pub trait Act: Clone + Debug {}
