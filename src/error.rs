//! Error types for dictionary operations.
//!
//! Only the strict operations fail: lookups through
//! [`get`](crate::SynchronizedDictionary::get), strict insertion through
//! [`add`](crate::SynchronizedDictionary::add) and the map constructions in
//! [`extensions`](crate::extensions). Duplicate keys in the record list are
//! not an error; sync passes skip over them and report a
//! [`SyncOutcome`](crate::SyncOutcome) instead.

use thiserror::Error;

/// Errors produced by dictionary operations.
///
/// The offending key is handed back wherever the operation owned it.
///
/// # Examples
///
/// ```rust
/// use dualmap::{DictionaryError, SynchronizedDictionary};
///
/// let mut dictionary = SynchronizedDictionary::new();
/// dictionary.add("key", 1).unwrap();
///
/// let error = dictionary.add("key", 2).unwrap_err();
/// assert_eq!(error, DictionaryError::DuplicateKey("key"));
/// assert_eq!(error.to_string(), "duplicate key: \"key\"");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError<K> {
    /// A strict lookup did not find the key.
    #[error("key not found")]
    KeyNotFound,

    /// A strict insertion or map construction found the key already present.
    #[error("duplicate key: {0:?}")]
    DuplicateKey(K),

    /// Rebuilding the map from records hit a duplicate that the duplicate
    /// check did not report.
    #[error("invariant violation: key {0:?} repeated while rebuilding from duplicate-free records")]
    InvariantViolation(K),
}

impl<K> DictionaryError<K> {
    /// Check if this error indicates a missing key
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }

    /// Check if this error indicates a rejected duplicate insertion
    pub const fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey(_))
    }

    /// Check if this error indicates a broken internal invariant
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }

    /// Returns the key carried by the error, if any.
    pub const fn key(&self) -> Option<&K> {
        match self {
            Self::KeyNotFound => None,
            Self::DuplicateKey(key) | Self::InvariantViolation(key) => Some(key),
        }
    }

    /// Consumes the error, returning the key carried by it, if any.
    pub fn into_key(self) -> Option<K> {
        match self {
            Self::KeyNotFound => None,
            Self::DuplicateKey(key) | Self::InvariantViolation(key) => Some(key),
        }
    }
}
