//! Serde support for [`SynchronizedDictionary`].
//!
//! A dictionary serializes as a sequence of `{ "key": .., "value": .. }`
//! records. Serializing emits the flattened view without mutating: the map
//! form when the records are duplicate-free, the records verbatim otherwise.
//! Deserializing reads the records and reloads, so a record sequence with
//! duplicate keys produces a dictionary that keeps those records and has an
//! empty map form.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{Error as _, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Entry, SynchronizedDictionary};

impl<K, V, S> Serialize for SynchronizedDictionary<K, V, S>
where
    K: Serialize + Eq + Hash,
    V: Serialize,
    S: BuildHasher,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        if self.has_duplicate_keys() {
            let mut seq = serializer.serialize_seq(Some(self.records().len()))?;
            for record in self.records() {
                seq.serialize_element(record)?;
            }
            return seq.end();
        }

        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (key, value) in self {
            seq.serialize_element(&Entry::new(key, value))?;
        }
        seq.end()
    }
}

struct SynchronizedDictionaryVisitor<K, V, S> {
    marker: PhantomData<fn() -> SynchronizedDictionary<K, V, S>>,
}

impl<K, V, S> SynchronizedDictionaryVisitor<K, V, S> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, K, V, S> Visitor<'de> for SynchronizedDictionaryVisitor<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
    V: Deserialize<'de> + Clone,
    S: BuildHasher + Clone + Default,
{
    type Value = SynchronizedDictionary<K, V, S>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of key-value records")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut records = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(record) = seq.next_element::<Entry<K, V>>()? {
            records.push(record);
        }

        let mut dictionary =
            SynchronizedDictionary::from_map(HashMap::with_hasher(S::default()));
        *dictionary.records_mut() = records;
        dictionary
            .reload()
            .map_err(|_| A::Error::custom("record key repeated while rebuilding the map form"))?;
        Ok(dictionary)
    }
}

impl<'de, K, V, S> Deserialize<'de> for SynchronizedDictionary<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
    V: Deserialize<'de> + Clone,
    S: BuildHasher + Clone + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SynchronizedDictionaryVisitor::new())
    }
}
