//! Policy.
use super::Env;

/// A policy on an environment.
///
/// A policy is a mapping from an observation to an action. The mapping can be
/// either deterministic or stochastic.
pub trait Policy<E: Env> {
    /// Samples an action given an observation.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}
