//! The hidden target sequence.

use crate::{GameConfig, MastermindError, MastermindErrorKind, MastermindResult};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Immutable secret sequence with a presence index.
///
/// `presence` holds the distinct values of `values` so that
/// [`SecretSequence::contains`] never rescans the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSequence {
    values: Vec<i32>,
    presence: HashSet<i32>,
}

impl SecretSequence {
    /// Builds a secret from supplier output.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSecret` if `values` is empty or any value lies outside
    /// `[number_min, number_max]`.
    #[instrument(skip(values), fields(len = values.len()))]
    pub fn new(values: Vec<i32>, number_min: i32, number_max: i32) -> MastermindResult<Self> {
        if values.is_empty() {
            warn!("Rejected empty secret");
            return Err(MastermindError::new(MastermindErrorKind::InvalidSecret(
                "secret must contain at least one value".to_string(),
            )));
        }

        let bounds = GameConfig::default().with_range(number_min, number_max);
        if let Some((position, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !bounds.in_range(**v))
        {
            warn!(position, value, number_min, number_max, "Rejected out-of-range secret value");
            return Err(MastermindError::new(MastermindErrorKind::InvalidSecret(format!(
                "value {} at position {} is outside [{}, {}]",
                value, position, number_min, number_max
            ))));
        }

        let presence = values.iter().copied().collect();
        debug!(?values, "Secret sequence built");
        Ok(Self { values, presence })
    }

    /// Builds a secret and also checks its length against `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSecret` on a length mismatch or any failure of
    /// [`SecretSequence::new`].
    #[instrument(skip(values), fields(len = values.len()))]
    pub fn from_config(values: Vec<i32>, config: &GameConfig) -> MastermindResult<Self> {
        if values.len() != *config.sequence_length() {
            return Err(MastermindError::new(MastermindErrorKind::InvalidSecret(format!(
                "secret has {} values, expected {}",
                values.len(),
                config.sequence_length()
            ))));
        }
        Self::new(values, *config.number_min(), *config.number_max())
    }

    /// Returns the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `position >= len()`.
    pub fn value_at(&self, position: usize) -> MastermindResult<i32> {
        self.values.get(position).copied().ok_or_else(|| {
            MastermindError::new(MastermindErrorKind::IndexOutOfRange {
                position,
                len: self.values.len(),
            })
        })
    }

    /// Returns true if `value` occurs anywhere in the secret.
    pub fn contains(&self, value: i32) -> bool {
        self.presence.contains(&value)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty secrets.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The secret values in order.
    pub fn values(&self) -> &[i32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_presence_from_distinct_values() {
        let secret = SecretSequence::new(vec![3, 3, 5], 1, 6).unwrap();
        assert!(secret.contains(3));
        assert!(secret.contains(5));
        assert!(!secret.contains(4));
        assert_eq!(secret.len(), 3);
    }

    #[test]
    fn rejects_empty() {
        let err = SecretSequence::new(vec![], 1, 6).unwrap_err();
        assert!(matches!(err.kind(), MastermindErrorKind::InvalidSecret(_)));
    }

    #[test]
    fn rejects_value_below_min() {
        let err = SecretSequence::new(vec![1, 0], 1, 6).unwrap_err();
        assert!(matches!(err.kind(), MastermindErrorKind::InvalidSecret(_)));
    }

    #[test]
    fn rejects_value_above_max() {
        let err = SecretSequence::new(vec![7], 1, 6).unwrap_err();
        assert!(matches!(err.kind(), MastermindErrorKind::InvalidSecret(_)));
    }

    #[test]
    fn value_at_bounds() {
        let secret = SecretSequence::new(vec![1, 2], 1, 2).unwrap();
        assert_eq!(secret.value_at(0).unwrap(), 1);
        assert_eq!(secret.value_at(1).unwrap(), 2);
        let err = secret.value_at(2).unwrap_err();
        assert_eq!(
            err.kind(),
            &MastermindErrorKind::IndexOutOfRange { position: 2, len: 2 }
        );
    }

    #[test]
    fn from_config_checks_length() {
        let config = GameConfig::default();
        assert!(SecretSequence::from_config(vec![1, 2], &config).is_ok());
        let err = SecretSequence::from_config(vec![1, 2, 1], &config).unwrap_err();
        assert!(matches!(err.kind(), MastermindErrorKind::InvalidSecret(_)));
    }
}
