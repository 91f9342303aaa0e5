//! Keyed collection of one entity type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Entity;

/// Rows of one entity type, ordered by key.
///
/// Keys come from a monotonically increasing counter and are never reused,
/// even after the row holding them is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound = "E: Entity")]
pub struct Table<E> {
    next_id: i64,
    rows: BTreeMap<i64, E>,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<E: Entity> Table<E> {
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&E> {
        self.rows.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    /// All rows in key order.
    #[must_use]
    pub fn list(&self) -> Vec<E> {
        self.rows.values().cloned().collect()
    }

    /// Iterate rows in key order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &E> + Clone {
        self.rows.values()
    }

    /// Rows matching `predicate`, in key order.
    pub fn filter<F>(&self, predicate: F) -> Vec<E>
    where
        F: Fn(&E) -> bool,
    {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }

    /// Keys of rows matching `predicate`.
    pub fn ids_where<F>(&self, predicate: F) -> Vec<i64>
    where
        F: Fn(&E) -> bool,
    {
        self.rows
            .iter()
            .filter(|(_, row)| predicate(row))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Assign the next key to `row` and store it.
    pub fn insert(&mut self, mut row: E) -> E {
        let id = self.next_id;
        self.next_id += 1;
        row.set_id(id);
        self.rows.insert(id, row.clone());
        row
    }

    /// Store a row under its own key, keeping the key counter ahead of it.
    ///
    /// Used when loading fixed datasets; regular creates go through [`Self::insert`].
    pub fn put(&mut self, row: E) {
        let id = row.id();
        self.next_id = self.next_id.max(id + 1);
        self.rows.insert(id, row);
    }

    /// Replace an existing row. Returns `false` if no row has that key.
    pub fn replace(&mut self, row: E) -> bool {
        match self.rows.get_mut(&row.id()) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) -> Option<E> {
        self.rows.remove(&id)
    }

    /// Remove every row matching `predicate`; returns how many were removed.
    pub fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&E) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|_, row| !predicate(row));
        before - self.rows.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Key the next insert will receive.
    #[must_use]
    pub const fn next_id(&self) -> i64 {
        self.next_id
    }
}
