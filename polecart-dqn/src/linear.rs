//! Reference linear action-value function.
use crate::{
    dqn::{huber, huber_grad},
    QNetwork,
};
use anyhow::{ensure, Result};
use polecart_core::{ActionId, PolecartError};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Configuration of [`LinearQNet`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct LinearQNetConfig {
    /// Number of input features.
    pub n_features: usize,

    /// Size of the action set.
    pub n_actions: usize,

    /// Learning rate of the gradient step.
    pub learning_rate: f32,
}

impl Default for LinearQNetConfig {
    fn default() -> Self {
        Self {
            n_features: 4,
            n_actions: 2,
            learning_rate: 0.01,
        }
    }
}

impl LinearQNetConfig {
    /// Checks the configuration.
    pub fn check(&self) -> Result<()> {
        if self.n_features == 0 || self.n_actions == 0 {
            return Err(
                PolecartError::Config("network dimensions must be positive".into()).into(),
            );
        }
        if self.learning_rate <= 0.0 {
            return Err(PolecartError::Config("learning rate must be positive".into()).into());
        }
        Ok(())
    }
}

/// A linear action-value function with hand-derived gradients.
///
/// `q(x)[a] = w[a] . x + b[a]`, trained by plain gradient descent on the mean
/// Huber loss with elementwise gradient clipping, as required by the
/// [`QNetwork`] contract. It stands in for a backend-provided network where
/// no autodiff framework is wanted, e.g. in tests.
///
/// Parameters start at zero, so two freshly built networks with the same
/// configuration are identical.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LinearQNet {
    /// Weights, one row per action.
    w: Vec<Vec<f32>>,

    /// Biases, one per action.
    b: Vec<f32>,

    learning_rate: f32,
}

impl LinearQNet {
    /// Constructs the network.
    pub fn build(config: &LinearQNetConfig) -> Result<Self> {
        config.check()?;
        Ok(Self {
            w: vec![vec![0.0; config.n_features]; config.n_actions],
            b: vec![0.0; config.n_actions],
            learning_rate: config.learning_rate,
        })
    }

    fn n_features(&self) -> usize {
        self.w[0].len()
    }

    fn n_params(&self) -> usize {
        self.b.len() * (self.n_features() + 1)
    }

    /// Returns the parameters as a flat vector: weight rows, then biases.
    pub fn parameters(&self) -> Vec<f32> {
        let mut params = Vec::with_capacity(self.n_params());
        for w in self.w.iter() {
            params.extend_from_slice(w);
        }
        params.extend_from_slice(&self.b);
        params
    }

    /// Overwrites the parameters with the given flat vector.
    pub fn load_parameters(&mut self, params: &[f32]) -> Result<()> {
        if params.len() != self.n_params() {
            return Err(PolecartError::ParameterMismatch {
                expected: self.n_params(),
                found: params.len(),
            }
            .into());
        }
        let n = self.n_features();
        for (a, w) in self.w.iter_mut().enumerate() {
            w.copy_from_slice(&params[a * n..(a + 1) * n]);
        }
        self.b.copy_from_slice(&params[self.w.len() * n..]);
        Ok(())
    }
}

impl<O> QNetwork<O> for LinearQNet
where
    O: AsRef<[f32]> + Clone + Debug,
{
    fn forward(&self, obs: &O) -> Vec<f32> {
        let x = obs.as_ref();
        debug_assert_eq!(x.len(), self.n_features());
        self.w
            .iter()
            .zip(self.b.iter())
            .map(|(w, b)| b + w.iter().zip(x.iter()).map(|(w, x)| w * x).sum::<f32>())
            .collect()
    }

    fn parameters(&self) -> Vec<f32> {
        LinearQNet::parameters(self)
    }

    fn load_parameters(&mut self, params: &[f32]) -> Result<()> {
        LinearQNet::load_parameters(self, params)
    }

    fn opt_step(&mut self, obs: &[O], act: &[ActionId], tgt: &[f32]) -> Result<f32> {
        ensure!(
            obs.len() == act.len() && obs.len() == tgt.len(),
            "batch columns must have equal length"
        );
        ensure!(!obs.is_empty(), "batch must not be empty");

        let n_actions = self.b.len();
        let n_features = self.n_features();
        let mut gw = vec![vec![0.0f32; n_features]; n_actions];
        let mut gb = vec![0.0f32; n_actions];
        let mut loss = 0.0f32;

        for ((obs, a), tgt) in obs.iter().zip(act.iter()).zip(tgt.iter()) {
            if *a >= n_actions {
                return Err(PolecartError::InvalidAction {
                    action: *a,
                    n_actions,
                }
                .into());
            }
            let x = obs.as_ref();
            let d = self.forward(obs)[*a] - tgt;
            loss += huber(d);

            let g = huber_grad(d) / act.len() as f32;
            for (gw, x) in gw[*a].iter_mut().zip(x.iter()) {
                *gw += g * x;
            }
            gb[*a] += g;
        }

        // Elementwise gradient clipping before the descent step.
        for (w, gw) in self.w.iter_mut().zip(gw.iter()) {
            for (w, gw) in w.iter_mut().zip(gw.iter()) {
                *w -= self.learning_rate * gw.clamp(-1.0, 1.0);
            }
        }
        for (b, gb) in self.b.iter_mut().zip(gb.iter()) {
            *b -= self.learning_rate * gb.clamp(-1.0, 1.0);
        }

        Ok(loss / act.len() as f32)
    }
}
