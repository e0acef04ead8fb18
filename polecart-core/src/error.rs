//! Errors in the library.
use thiserror::Error;

/// Errors raised by the core components.
///
/// The training loop treats [`PolecartError::InsufficientData`] as a signal to
/// skip the current optimization step. All other variants indicate a logic or
/// configuration error and abort training.
#[derive(Error, Debug)]
pub enum PolecartError {
    /// More transitions were requested than the replay buffer holds.
    #[error("requested {requested} transitions, but only {available} are stored")]
    InsufficientData {
        /// Number of transitions requested.
        requested: usize,

        /// Number of transitions currently stored.
        available: usize,
    },

    /// An action index outside the valid action set.
    #[error("action {action} is outside the action set of size {n_actions}")]
    InvalidAction {
        /// The offending action index.
        action: usize,

        /// Size of the valid action set.
        n_actions: usize,
    },

    /// An invalid configuration value, detected at startup.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A parameter vector of unexpected length was loaded into a network.
    #[error("parameter count mismatch: expected {expected}, found {found}")]
    ParameterMismatch {
        /// Number of parameters the network holds.
        expected: usize,

        /// Number of parameters given.
        found: usize,
    },

    /// A record key was not found.
    #[error("record key error: {0}")]
    RecordKey(String),

    /// A record value had an unexpected type.
    #[error("record value type error: {0}")]
    RecordValueType(String),
}
