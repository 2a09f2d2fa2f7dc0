//! The synchronized dual-representation dictionary.
//!
//! This module provides [`SynchronizedDictionary`], which owns two forms of
//! the same associations:
//!
//! - the **ordered-record form**, a `Vec` of [`Entry`] records that a host
//!   serialization framework persists and an external editor renders,
//! - the **map form**, a `HashMap` used for every lookup and mutation.
//!
//! # Synchronization
//!
//! ```text
//!                   flatten (before save)
//!     map form ─────────────────────────────► records
//!        ▲                                       │
//!        │         reload (after load)           │
//!        └───────────────────────────────────────┘
//!
//!     either pass is skipped while records contain a duplicate key
//! ```
//!
//! # Examples
//!
//! ```rust
//! use dualmap::{Entry, SynchronizedDictionary};
//!
//! let mut dictionary = SynchronizedDictionary::new();
//! dictionary.set("north".to_string(), (0, 1));
//! dictionary.set("east".to_string(), (1, 0));
//!
//! // Save: flatten, then persist the records.
//! assert!(dictionary.flatten().is_synchronized());
//! let saved: Vec<Entry<String, (i32, i32)>> = dictionary.records().to_vec();
//!
//! // Load: populate the records, then reload.
//! let mut loaded = SynchronizedDictionary::new();
//! *loaded.records_mut() = saved;
//! loaded.reload().unwrap();
//! assert_eq!(loaded, dictionary);
//! ```

mod duplicates;
mod entry;
#[cfg(feature = "serde")]
mod serde_support;
mod synchronized;

pub use duplicates::DuplicateKeys;
pub use entry::Entry;
pub use synchronized::IntoIter;
pub use synchronized::Iter;
pub use synchronized::Keys;
pub use synchronized::SyncOutcome;
pub use synchronized::SynchronizedDictionary;
pub use synchronized::Values;
pub use synchronized::ValuesMut;
