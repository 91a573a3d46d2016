//! Conversion terminal operations: materialize into standard containers.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{Result, SequinError};
use crate::stage::Stage;

impl<T: 'static> Stage<T> {
    /// Materializes the ordered result.
    pub fn to_vec(&self) -> Vec<T> {
        self.run()
    }

    /// Materializes into a set, deduplicating by the element total order.
    pub fn to_set(&self) -> BTreeSet<T>
    where
        T: Ord,
    {
        self.run().into_iter().collect()
    }

    /// Builds a map from a derived key to the element itself.
    ///
    /// Key semantics are strictly one-to-one: a repeated key fails with
    /// [`SequinError::DuplicateKey`] instead of silently overwriting.
    pub fn to_map<K, F>(&self, key_selector: F) -> Result<BTreeMap<K, T>>
    where
        K: Ord + fmt::Debug,
        F: Fn(&T) -> K,
    {
        let mut map = BTreeMap::new();
        for item in self.run() {
            match map.entry(key_selector(&item)) {
                Entry::Occupied(slot) => {
                    return Err(SequinError::DuplicateKey {
                        key: format!("{:?}", slot.key()),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(item);
                }
            }
        }
        Ok(map)
    }

    /// Builds a map from a derived key to a derived value.
    ///
    /// Fails with [`SequinError::DuplicateKey`] on a repeated key, like
    /// [`to_map`](Self::to_map).
    pub fn to_map_with<K, V, FK, FV>(
        &self,
        key_selector: FK,
        value_selector: FV,
    ) -> Result<BTreeMap<K, V>>
    where
        K: Ord + fmt::Debug,
        FK: Fn(&T) -> K,
        FV: Fn(&T) -> V,
    {
        let mut map = BTreeMap::new();
        for item in self.run() {
            let value = value_selector(&item);
            match map.entry(key_selector(&item)) {
                Entry::Occupied(slot) => {
                    return Err(SequinError::DuplicateKey {
                        key: format!("{:?}", slot.key()),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            }
        }
        Ok(map)
    }
}
