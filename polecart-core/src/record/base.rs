//! Base implementation of records.
use crate::PolecartError;
use chrono::prelude::{DateTime, Local};
use std::collections::{
    hash_map::{Iter, Keys},
    HashMap,
};

/// Possible types of values stored in a [`Record`].
#[derive(Debug, Clone)]
pub enum RecordValue {
    /// A single floating-point value, typically a metric like loss.
    Scalar(f32),

    /// A timestamp with the local timezone.
    DateTime(DateTime<Local>),

    /// A text value.
    String(String),
}

/// A container of key-value pairs of [`RecordValue`]s.
///
/// # Examples
///
/// ```
/// use polecart_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("loss", 0.5);
/// record.insert("episode_return", RecordValue::Scalar(21.0));
/// assert_eq!(record.get_scalar("loss").unwrap(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys in the record.
    pub fn keys(&self) -> Keys<String, RecordValue> {
        self.0.keys()
    }

    /// Returns an iterator over key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns the value for the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Returns true if the record holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merges the values of two records, the other record taking precedence
    /// on key collisions.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Returns the scalar value for the given key.
    pub fn get_scalar(&self, k: &str) -> Result<f32, PolecartError> {
        match self
            .0
            .get(k)
            .ok_or_else(|| PolecartError::RecordKey(k.into()))?
        {
            RecordValue::Scalar(v) => Ok(*v),
            _ => Err(PolecartError::RecordValueType(k.into())),
        }
    }

    /// Returns the string value for the given key.
    pub fn get_string(&self, k: &str) -> Result<String, PolecartError> {
        match self
            .0
            .get(k)
            .ok_or_else(|| PolecartError::RecordKey(k.into()))?
        {
            RecordValue::String(s) => Ok(s.clone()),
            _ => Err(PolecartError::RecordValueType(k.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_the_right_hand_side() {
        let a = Record::from_slice(&[
            ("x", RecordValue::Scalar(1.0)),
            ("y", RecordValue::Scalar(2.0)),
        ]);
        let b = Record::from_scalar("y", 3.0);
        let merged = a.merge(b);
        assert_eq!(merged.get_scalar("x").unwrap(), 1.0);
        assert_eq!(merged.get_scalar("y").unwrap(), 3.0);
    }

    #[test]
    fn scalar_access_checks_the_type() {
        let mut record = Record::empty();
        record.insert("name", RecordValue::String("dqn".into()));
        assert!(matches!(
            record.get_scalar("name"),
            Err(PolecartError::RecordValueType(_))
        ));
        assert!(matches!(
            record.get_scalar("missing"),
            Err(PolecartError::RecordKey(_))
        ));
    }
}
