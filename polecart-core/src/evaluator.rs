//! Evaluate a [`Policy`].
use crate::{record::Record, Env, Policy};
use anyhow::Result;
mod default_evaluator;
pub use default_evaluator::DefaultEvaluator;

/// Evaluates a policy.
///
/// The caller is responsible for the internal state of the policy, like
/// switching an agent between training and evaluation mode.
pub trait Evaluator<E: Env, P: Policy<E>> {
    /// Runs evaluation episodes and returns their metrics.
    fn evaluate(&mut self, policy: &mut P) -> Result<Record>;
}
