//! Ring buffer of transitions with uniform sampling.
use super::{Transition, TransitionBatch, UniformReplayBufferConfig};
use crate::{ExperienceBufferBase, PolecartError, ReplayBufferBase};
use anyhow::Result;
use rand::{rngs::StdRng, seq::index, SeedableRng};
use std::fmt::Debug;

/// A fixed-capacity replay buffer with uniform random sampling.
///
/// The backing store is a ring: once `capacity` transitions are held, each
/// insertion overwrites the oldest entry, so the buffer always contains the
/// most recent `capacity` transitions (or fewer, during warm-up).
///
/// [`ReplayBufferBase::batch`] draws transitions uniformly at random without
/// replacement. No ordering beyond "uniform over currently held transitions"
/// is exposed to callers.
///
/// # Examples
///
/// ```
/// use polecart_core::{
///     replay_buffer::{Transition, UniformReplayBuffer, UniformReplayBufferConfig},
///     ExperienceBufferBase, ReplayBufferBase,
/// };
///
/// let config = UniformReplayBufferConfig::default().capacity(100);
/// let mut buffer = UniformReplayBuffer::<Vec<f32>>::build(&config).unwrap();
/// buffer.push(Transition::new(vec![0.0], 1, 1.0, vec![1.0], false)).unwrap();
/// let batch = buffer.batch(1).unwrap();
/// assert_eq!(batch.len(), 1);
/// ```
pub struct UniformReplayBuffer<O> {
    /// Maximum number of transitions that can be stored.
    capacity: usize,

    /// Current insertion index.
    i: usize,

    /// Stored transitions, at most `capacity` of them.
    transitions: Vec<Transition<O>>,

    /// Random number generator for sampling.
    rng: StdRng,
}

impl<O> UniformReplayBuffer<O> {
    /// Returns the capacity of the buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the stored transitions.
    ///
    /// The iteration order is the ring order of the backing store, not the
    /// insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition<O>> {
        self.transitions.iter()
    }
}

impl<O: Clone + Debug> ExperienceBufferBase for UniformReplayBuffer<O> {
    type Item = Transition<O>;

    /// Pushes a transition into the buffer, evicting the oldest entry when
    /// the buffer is at capacity. O(1), always succeeds.
    fn push(&mut self, tr: Self::Item) -> Result<()> {
        if self.transitions.len() < self.capacity {
            self.transitions.push(tr);
        } else {
            self.transitions[self.i] = tr;
        }
        self.i = (self.i + 1) % self.capacity;
        Ok(())
    }

    fn len(&self) -> usize {
        self.transitions.len()
    }
}

impl<O: Clone + Debug> ReplayBufferBase for UniformReplayBuffer<O> {
    type Config = UniformReplayBufferConfig;
    type Batch = TransitionBatch<O>;

    fn build(config: &Self::Config) -> Result<Self> {
        config.check()?;
        Ok(Self {
            capacity: config.capacity,
            i: 0,
            transitions: Vec::with_capacity(config.capacity),
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Samples `size` pairwise-distinct transitions uniformly at random.
    ///
    /// The stored transitions are left untouched; only the internal random
    /// number generator advances.
    fn batch(&mut self, size: usize) -> Result<Self::Batch> {
        if size > self.transitions.len() {
            return Err(PolecartError::InsufficientData {
                requested: size,
                available: self.transitions.len(),
            }
            .into());
        }
        let ixs = index::sample(&mut self.rng, self.transitions.len(), size);
        let trs = ixs.iter().map(|ix| &self.transitions[ix]).collect::<Vec<_>>();
        Ok(trs.into())
    }
}
