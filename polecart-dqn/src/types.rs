//! Observation and action types for environments with flat features and
//! discrete actions.
use polecart_core::{Act, ActionId, Obs};

/// A flat feature-vector observation, e.g. a flattened frame difference.
#[derive(Clone, Debug, PartialEq)]
pub struct VecObs(pub Vec<f32>);

impl Obs for VecObs {}

impl AsRef<[f32]> for VecObs {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for VecObs {
    fn from(v: Vec<f32>) -> Self {
        Self(v)
    }
}

/// A discrete action carrying its action index.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteAct(pub ActionId);

impl Act for DiscreteAct {}

impl From<ActionId> for DiscreteAct {
    fn from(a: ActionId) -> Self {
        Self(a)
    }
}

impl From<DiscreteAct> for ActionId {
    fn from(a: DiscreteAct) -> Self {
        a.0
    }
}
