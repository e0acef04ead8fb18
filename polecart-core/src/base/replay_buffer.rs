//! Replay buffer interfaces.
//!
//! Replay buffers store transitions gathered from environment interaction and
//! sample batches from them, decorrelating consecutive training updates.
//! Storage ([`ExperienceBufferBase`]) and batch generation
//! ([`ReplayBufferBase`]) are separate seams: processes that only collect
//! experience need the former, agents need the latter.
use anyhow::Result;

/// Interface for buffers that store experiences from environments.
pub trait ExperienceBufferBase {
    /// The type of items stored in the buffer.
    type Item;

    /// Pushes an item into the buffer.
    fn push(&mut self, tr: Self::Item) -> Result<()>;

    /// Returns the current number of items in the buffer.
    fn len(&self) -> usize;

    /// Returns true if the buffer holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interface for replay buffers that generate batches for training.
pub trait ReplayBufferBase {
    /// Configuration of the buffer.
    type Config: Clone;

    /// The type of batches generated for training.
    type Batch;

    /// Builds a replay buffer from the given configuration.
    ///
    /// Fails with [`PolecartError::Config`](crate::PolecartError::Config) on
    /// invalid configurations, e.g. a capacity of zero.
    fn build(config: &Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// Samples a batch of `size` experiences for training.
    ///
    /// Fails with
    /// [`PolecartError::InsufficientData`](crate::PolecartError::InsufficientData)
    /// when fewer than `size` experiences are stored. Sampling never changes
    /// the stored experiences.
    fn batch(&mut self, size: usize) -> Result<Self::Batch>;
}
