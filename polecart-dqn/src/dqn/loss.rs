//! Loss shaping and TD target computation.
use crate::QNetwork;
use polecart_core::{replay_buffer::TransitionBatch, ActionId};

/// Huber loss: `0.5 * d^2` for `|d| <= 1`, else `|d| - 0.5`.
///
/// Quadratic near zero, linear far from zero. The linear tails bound the
/// gradient magnitude of outlier transitions.
pub fn huber(d: f32) -> f32 {
    let a = d.abs();
    if a <= 1.0 {
        0.5 * d * d
    } else {
        a - 0.5
    }
}

/// Derivative of [`huber`], which is `d` clamped to `[-1, 1]`.
pub fn huber_grad(d: f32) -> f32 {
    d.clamp(-1.0, 1.0)
}

/// Index of the maximal action value, ties broken by the lowest index.
///
/// The tie break makes greedy selection deterministic.
pub fn greedy_action(q: &[f32]) -> ActionId {
    let mut best = 0;
    for (a, v) in q.iter().enumerate() {
        if *v > q[best] {
            best = a;
        }
    }
    best
}

/// Computes the one-step bootstrap targets of a batch.
///
/// For each transition: `y = reward + gamma * max_a q_tgt(next_obs)[a]`,
/// with the bootstrap term dropped on terminal transitions.
pub fn td_targets<O, Q: QNetwork<O>>(
    qnet_tgt: &Q,
    batch: &TransitionBatch<O>,
    gamma: f32,
) -> Vec<f32> {
    batch
        .next_obs
        .iter()
        .zip(batch.reward.iter())
        .zip(batch.is_done.iter())
        .map(|((next_obs, reward), is_done)| {
            let v = if *is_done {
                0.0
            } else {
                qnet_tgt
                    .forward(next_obs)
                    .into_iter()
                    .fold(f32::NEG_INFINITY, f32::max)
            };
            reward + gamma * v
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huber_is_quadratic_near_zero() {
        assert_eq!(huber(0.0), 0.0);
        assert_eq!(huber(0.5), 0.125);
        assert_eq!(huber(1.0), 0.5);
    }

    #[test]
    fn huber_is_linear_in_the_tails() {
        assert_eq!(huber(2.0), 1.5);
        assert_eq!(huber(10.0), 9.5);
    }

    #[test]
    fn huber_is_symmetric() {
        assert_eq!(huber(-2.0), huber(2.0));
        assert_eq!(huber(-0.5), huber(0.5));
    }

    #[test]
    fn huber_grad_is_bounded() {
        assert_eq!(huber_grad(0.5), 0.5);
        assert_eq!(huber_grad(3.0), 1.0);
        assert_eq!(huber_grad(-3.0), -1.0);
    }

    #[test]
    fn greedy_action_breaks_ties_by_lowest_index() {
        assert_eq!(greedy_action(&[0.0, 1.0, 1.0]), 1);
        assert_eq!(greedy_action(&[2.0, 2.0, 2.0]), 0);
        assert_eq!(greedy_action(&[0.0, -1.0, 3.0]), 2);
    }
}
