//! Epsilon-greedy exploration.
use super::loss::greedy_action;
use anyhow::Result;
use polecart_core::{ActionId, PolecartError};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration of [`EpsilonGreedy`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EpsilonGreedyConfig {
    /// Epsilon value at step 0.
    pub eps_start: f64,

    /// Asymptotic epsilon value.
    pub eps_final: f64,

    /// Decay constant of the exponential schedule, in steps.
    pub decay: f64,

    /// Seed of the random number generator.
    pub seed: u64,
}

impl Default for EpsilonGreedyConfig {
    fn default() -> Self {
        Self {
            eps_start: 0.9,
            eps_final: 0.05,
            decay: 200.0,
            seed: 42,
        }
    }
}

impl EpsilonGreedyConfig {
    /// Sets the epsilon value at step 0.
    pub fn eps_start(mut self, v: f64) -> Self {
        self.eps_start = v;
        self
    }

    /// Sets the asymptotic epsilon value.
    pub fn eps_final(mut self, v: f64) -> Self {
        self.eps_final = v;
        self
    }

    /// Sets the decay constant in steps.
    pub fn decay(mut self, v: f64) -> Self {
        self.decay = v;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Checks the configuration.
    pub fn check(&self) -> Result<()> {
        if self.decay <= 0.0 {
            return Err(PolecartError::Config("epsilon decay must be positive".into()).into());
        }
        if self.eps_final > self.eps_start {
            return Err(
                PolecartError::Config("eps_final must not exceed eps_start".into()).into(),
            );
        }
        Ok(())
    }
}

/// Epsilon-greedy explorer with an exponentially decaying exploration rate.
///
/// The schedule is a pure function of the global step counter:
/// `eps(t) = eps_final + (eps_start - eps_final) * exp(-t / decay)`.
/// With probability `eps` an action is drawn uniformly at random, otherwise
/// the greedy action is taken, ties broken by the lowest action index.
///
/// All randomness comes from a seeded generator, so action sequences are
/// reproducible given the same seed and the same action values.
pub struct EpsilonGreedy {
    eps_start: f64,
    eps_final: f64,
    decay: f64,
    n_steps: usize,
    rng: StdRng,
}

impl EpsilonGreedy {
    /// Constructs an epsilon-greedy explorer.
    pub fn build(config: &EpsilonGreedyConfig) -> Result<Self> {
        config.check()?;
        Ok(Self {
            eps_start: config.eps_start,
            eps_final: config.eps_final,
            decay: config.decay,
            n_steps: 0,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// The exploration rate at the given global step.
    pub fn epsilon(&self, step: usize) -> f64 {
        self.eps_final + (self.eps_start - self.eps_final) * (-(step as f64) / self.decay).exp()
    }

    /// Number of actions taken so far.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Takes an action given the action values, advancing the step counter.
    pub fn action(&mut self, q: &[f32]) -> ActionId {
        let eps = self.epsilon(self.n_steps);
        self.n_steps += 1;

        let u: f64 = self.rng.gen();
        if u > eps {
            greedy_action(q)
        } else {
            self.rng.gen_range(0..q.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explorer() -> EpsilonGreedy {
        EpsilonGreedy::build(&EpsilonGreedyConfig::default()).unwrap()
    }

    #[test]
    fn schedule_starts_at_eps_start() {
        assert!((explorer().epsilon(0) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn schedule_is_monotonically_non_increasing() {
        let e = explorer();
        let mut prev = e.epsilon(0);
        for step in (0..5000).step_by(50) {
            let eps = e.epsilon(step);
            assert!(eps <= prev + 1e-12);
            prev = eps;
        }
    }

    #[test]
    fn schedule_approaches_eps_final() {
        let e = explorer();
        // eps(1000) = 0.05 + 0.85 * exp(-5)
        assert!((e.epsilon(1000) - 0.055727).abs() < 1e-4);
        assert!((e.epsilon(100_000) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn zero_decay_is_rejected() {
        let config = EpsilonGreedyConfig::default().decay(0.0);
        assert!(EpsilonGreedy::build(&config).is_err());
    }

    #[test]
    fn action_sequences_are_reproducible() {
        let q = [0.1f32, 0.7, 0.2];
        let mut a = explorer();
        let mut b = explorer();
        for _ in 0..100 {
            assert_eq!(a.action(&q), b.action(&q));
        }
    }

    #[test]
    fn actions_stay_in_the_action_set() {
        let q = [0.0f32, 1.0];
        let mut e = explorer();
        for _ in 0..500 {
            assert!(e.action(&q) < 2);
        }
    }
}
