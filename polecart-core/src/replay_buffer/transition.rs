//! Transition of an environment step.
use crate::ActionId;

/// One environment step: `(o_t, a_t, r_t, o_t+1, done)`.
///
/// Immutable once constructed. After being pushed, a transition is owned
/// exclusively by the replay buffer; batches hand out clones.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<O> {
    /// Observation before the action.
    pub obs: O,

    /// The action taken.
    pub act: ActionId,

    /// Reward received for the action.
    pub reward: f32,

    /// Observation after the action.
    pub next_obs: O,

    /// Whether the episode ended with this step.
    pub is_done: bool,
}

impl<O> Transition<O> {
    /// Constructs a transition.
    pub fn new(obs: O, act: ActionId, reward: f32, next_obs: O, is_done: bool) -> Self {
        Self {
            obs,
            act,
            reward,
            next_obs,
            is_done,
        }
    }
}
