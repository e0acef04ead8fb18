//! Environment step.
use super::Env;

/// Additional information to `Obs` and `Act`.
pub trait Info {}

impl Info for () {}

/// An action, observation and reward tuple `(a_t, o_t+1, r_t)` emitted by an
/// environment at every interaction step.
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation after the action was applied.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Whether the episode ended with this step.
    pub is_done: bool,

    /// Information defined by the user.
    pub info: E::Info,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(obs: E::Obs, act: E::Act, reward: f32, is_done: bool, info: E::Info) -> Self {
        Step {
            act,
            obs,
            reward,
            is_done,
            info,
        }
    }
}

/// Processes a [`Step`] and outputs an item [`Self::Output`].
///
/// The trainer feeds every [`Step`] through a processor; the output, typically
/// a transition `(o_t, a_t, r_t, o_t+1, done)`, is pushed into a buffer
/// implementing [`ExperienceBufferBase`](crate::ExperienceBufferBase). The
/// previous observation `o_t` is kept inside the processor.
pub trait StepProcessor<E: Env> {
    /// Configuration.
    type Config: Clone;

    /// The type of items produced from steps.
    type Output;

    /// Builds a processor.
    fn build(config: &Self::Config) -> Self;

    /// Resets the processor with the initial observation of an episode.
    fn reset(&mut self, init_obs: E::Obs);

    /// Processes a [`Step`] object.
    fn process(&mut self, step: Step<E>) -> Self::Output;
}
