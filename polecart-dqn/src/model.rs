//! Interface to the function approximator.
use anyhow::Result;
use polecart_core::ActionId;

/// An action-value function with a trainable parameter vector.
///
/// This is the capability boundary towards whatever learning backend is in
/// use: the agent never sees layers, devices or an optimizer, only forward
/// evaluation, an opaque ordered parameter vector and one training step.
/// Observations arrive already placed wherever the implementation needs them.
///
/// `Clone` is required so the agent can spawn its target network as a copy of
/// the policy network.
pub trait QNetwork<O>: Clone {
    /// Computes the action values of an observation.
    ///
    /// The returned vector has one entry per action in the action set.
    fn forward(&self, obs: &O) -> Vec<f32>;

    /// Returns the parameters as a flat, ordered vector.
    fn parameters(&self) -> Vec<f32>;

    /// Overwrites the parameters with the given vector.
    ///
    /// Fails with
    /// [`PolecartError::ParameterMismatch`](polecart_core::PolecartError::ParameterMismatch)
    /// if the length does not match [`QNetwork::parameters`].
    fn load_parameters(&mut self, params: &[f32]) -> Result<()>;

    /// Performs one optimization step on a batch.
    ///
    /// Implementations minimize the mean elementwise Huber loss of
    /// `forward(obs[i])[act[i]] - tgt[i]` and clip every gradient component
    /// to `[-1, 1]` before applying the optimizer. Which optimizer runs
    /// behind this method is the implementation's choice.
    ///
    /// Returns the loss value of the batch.
    fn opt_step(&mut self, obs: &[O], act: &[ActionId], tgt: &[f32]) -> Result<f32>;
}
