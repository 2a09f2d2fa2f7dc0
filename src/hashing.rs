//! Default hasher selection.
//!
//! The hasher used by [`SynchronizedDictionary`](crate::SynchronizedDictionary)
//! and by the maps produced in [`extensions`](crate::extensions) is chosen at
//! compile time through feature flags:
//!
//! | Features enabled     | Default hasher                               |
//! |----------------------|----------------------------------------------|
//! | none                 | `std::collections::hash_map::RandomState`    |
//! | `fxhash`             | `rustc_hash::FxBuildHasher`                  |
//! | `ahash`              | `ahash::RandomState`                         |
//! | `fxhash` and `ahash` | `rustc_hash::FxBuildHasher`                  |
//!
//! Any other [`BuildHasher`](std::hash::BuildHasher) can still be supplied
//! explicitly through
//! [`SynchronizedDictionary::with_hasher`](crate::SynchronizedDictionary::with_hasher).

use std::collections::HashMap;

/// The `BuildHasher` used when none is given explicitly.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used when none is given explicitly.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The `BuildHasher` used when none is given explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Hash map keyed with the [`DefaultHashBuilder`].
pub type DictionaryMap<K, V> = HashMap<K, V, DefaultHashBuilder>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_dictionary_map_default_is_empty() {
        let map: DictionaryMap<String, i32> = DictionaryMap::default();
        assert!(map.is_empty());
    }

    #[rstest]
    fn test_default_hash_builder_is_deterministic_within_instance() {
        use std::hash::BuildHasher;

        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
    }
}
