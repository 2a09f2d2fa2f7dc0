//! # dualmap
//!
//! A dictionary that can be persisted through a format limited to ordered,
//! flat record lists while still behaving as a full associative map at runtime.
//!
//! ## Overview
//!
//! - **Synchronized Dictionary**: [`SynchronizedDictionary`] keeps an ordered
//!   record list and a hash map in sync through an explicit
//!   [`flatten`](SynchronizedDictionary::flatten) /
//!   [`reload`](SynchronizedDictionary::reload) contract, and tolerates
//!   duplicate keys in the record list instead of failing on them.
//! - **Map Extensions**: [`PairIteratorExt`] provides key/value projection,
//!   re-keying, re-valuing and strict collection for any iterator of pairs.
//! - **Merging**: [`merge`] combines two pair sequences, resolving shared keys
//!   with a [`MergeStrategy`].
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize and deserialize dictionaries as record sequences
//! - `fxhash`: Use `rustc-hash` as the default hasher
//! - `ahash`: Use `ahash` as the default hasher
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use dualmap::prelude::*;
//!
//! let mut dictionary = SynchronizedDictionary::new();
//! dictionary.set("health".to_string(), 100);
//! dictionary.set("mana".to_string(), 40);
//!
//! // Before persisting, flatten the map into the record list.
//! dictionary.flatten();
//! assert_eq!(dictionary.records().len(), 2);
//!
//! // After loading, rebuild the map from the record list.
//! dictionary.reload().unwrap();
//! assert_eq!(dictionary.get("health"), Ok(&100));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use dualmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dictionary::*;
    pub use crate::error::*;
    pub use crate::extensions::*;
    pub use crate::hashing::*;
}

pub mod dictionary;
pub mod error;
pub mod extensions;
pub mod hashing;

pub use dictionary::{DuplicateKeys, Entry, SyncOutcome, SynchronizedDictionary};
pub use error::DictionaryError;
pub use extensions::{MergeStrategy, PairIteratorExt, ValueGroup, merge};
pub use hashing::{DefaultHashBuilder, DictionaryMap};
