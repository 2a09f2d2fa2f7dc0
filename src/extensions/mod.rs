//! Stateless helpers over sequences of key-value pairs.
//!
//! - [`PairIteratorExt`]: key/value projection (`select_keys`,
//!   `select_values`), re-keying (`map_on_key`), re-valuing (`map_on_value`)
//!   and strict collection (`to_map`) for any iterator of pairs.
//! - [`merge`]: combines two pair sequences, resolving shared keys with a
//!   [`MergeStrategy`] from [`strategy`].
//!
//! Every operation here works on plain iterators, so it applies equally to
//! `HashMap`s, [`SynchronizedDictionary`](crate::SynchronizedDictionary)
//! iterators and record lists.

mod merging;
mod pairs;
pub mod strategy;

pub use merging::merge;
pub use pairs::PairIteratorExt;
pub use pairs::SelectKeys;
pub use pairs::SelectValues;
pub use strategy::MergeStrategy;
pub use strategy::ValueGroup;
