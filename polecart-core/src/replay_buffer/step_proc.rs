//! Step processor producing one-step transitions.
use super::Transition;
use crate::{ActionId, Env, Step, StepProcessor};
use std::{default::Default, marker::PhantomData};

/// Configuration of [`OneStepProcessor`].
#[derive(Clone, Debug)]
pub struct OneStepProcessorConfig {}

impl Default for OneStepProcessorConfig {
    fn default() -> Self {
        Self {}
    }
}

/// Converts environment steps into one-step transitions.
///
/// The processor keeps the previous observation `o_t`; when a [`Step`] with
/// `(a_t, o_t+1, r_t)` arrives, it emits the transition
/// `(o_t, a_t, r_t, o_t+1, done)` and retains `o_t+1` for the next step.
///
/// # Panics
///
/// [`StepProcessor::process`] panics if called before
/// [`StepProcessor::reset`], which must supply the initial observation of
/// each episode.
pub struct OneStepProcessor<E, O> {
    /// The previous observation.
    prev_obs: Option<O>,

    /// Phantom data holding the environment type.
    phantom: PhantomData<E>,
}

impl<E, O> StepProcessor<E> for OneStepProcessor<E, O>
where
    E: Env,
    O: Clone + From<E::Obs>,
    E::Act: Into<ActionId>,
{
    type Config = OneStepProcessorConfig;
    type Output = Transition<O>;

    fn build(_config: &Self::Config) -> Self {
        Self {
            prev_obs: None,
            phantom: PhantomData,
        }
    }

    fn reset(&mut self, init_obs: E::Obs) {
        self.prev_obs = Some(init_obs.into());
    }

    fn process(&mut self, step: Step<E>) -> Self::Output {
        let next_obs: O = step.obs.into();
        let obs = self
            .prev_obs
            .replace(next_obs.clone())
            .expect("prev_obs is not set. Forgot to call reset()?");
        Transition::new(obs, step.act.into(), step.reward, next_obs, step.is_done)
    }
}
