//! Batch of transitions.
use super::Transition;
use crate::ActionId;

/// A batch of transitions in column order, as sampled from a replay buffer.
#[derive(Debug)]
pub struct TransitionBatch<O> {
    /// Observations before the actions.
    pub obs: Vec<O>,

    /// Actions.
    pub act: Vec<ActionId>,

    /// Observations after the actions.
    pub next_obs: Vec<O>,

    /// Rewards.
    pub reward: Vec<f32>,

    /// Episode-end flags.
    pub is_done: Vec<bool>,
}

impl<O> TransitionBatch<O> {
    /// Returns the number of transitions in the batch.
    pub fn len(&self) -> usize {
        self.reward.len()
    }

    /// Returns true if the batch holds no transitions.
    pub fn is_empty(&self) -> bool {
        self.reward.is_empty()
    }

    /// Unpacks the batch into its columns:
    /// `(obs, act, next_obs, reward, is_done)`.
    pub fn unpack(self) -> (Vec<O>, Vec<ActionId>, Vec<O>, Vec<f32>, Vec<bool>) {
        (self.obs, self.act, self.next_obs, self.reward, self.is_done)
    }
}

impl<O: Clone> From<Vec<&Transition<O>>> for TransitionBatch<O> {
    fn from(trs: Vec<&Transition<O>>) -> Self {
        let mut obs = Vec::with_capacity(trs.len());
        let mut act = Vec::with_capacity(trs.len());
        let mut next_obs = Vec::with_capacity(trs.len());
        let mut reward = Vec::with_capacity(trs.len());
        let mut is_done = Vec::with_capacity(trs.len());
        for tr in trs {
            obs.push(tr.obs.clone());
            act.push(tr.act);
            next_obs.push(tr.next_obs.clone());
            reward.push(tr.reward);
            is_done.push(tr.is_done);
        }
        Self {
            obs,
            act,
            next_obs,
            reward,
            is_done,
        }
    }
}
