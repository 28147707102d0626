//! Insertion-ordered association table backing JSON objects and arrays.

use alloc::{string::String, vec::Vec};
use core::mem;

const DEFAULT_CAPACITY: usize = 4;

#[derive(Clone, Debug, PartialEq)]
struct Pair<V> {
    key: Option<String>,
    value: V,
}

/// An ordered sequence of `(optional key, value)` pairs.
///
/// Entries keep their insertion order. Lookup is a linear scan, which is the
/// right trade for the small member counts JSON documents carry in practice.
/// A pair with an absent key never compares equal to any other pair, so
/// unkeyed entries (array elements) only ever append.
///
/// # Examples
///
/// ```
/// use jsonlax::Table;
///
/// let mut table = Table::new();
/// table.set(Some("a"), 1);
/// table.set(None, 2);
/// assert_eq!(table.get("a"), Some(&1));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Table<V> {
    pairs: Vec<Pair<V>>,
}

impl<V> Table<V> {
    /// Creates an empty table with a small default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty table sized for `hint` entries.
    ///
    /// A zero hint reserves the small default capacity instead.
    #[must_use]
    pub fn with_capacity(hint: usize) -> Self {
        let capacity = if hint == 0 { DEFAULT_CAPACITY } else { hint };
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sets `value` under `key`.
    ///
    /// If the key is already present the value is replaced in place, keeping
    /// the entry's original position, and the displaced value is returned.
    /// An absent key always appends a new entry and returns `None`.
    pub fn set(&mut self, key: Option<&str>, value: V) -> Option<V> {
        if let Some(key) = key {
            if let Some(pair) = self
                .pairs
                .iter_mut()
                .find(|pair| pair.key.as_deref() == Some(key))
            {
                return Some(mem::replace(&mut pair.value, value));
            }
            self.pairs.push(Pair {
                key: Some(String::from(key)),
                value,
            });
        } else {
            self.pairs.push(Pair { key: None, value });
        }
        None
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.pairs
            .iter()
            .find(|pair| pair.key.as_deref() == Some(key))
            .map(|pair| &pair.value)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Entries<'_, V> {
        Entries {
            inner: self.pairs.iter(),
        }
    }
}

impl<V> Default for Table<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a Table<V> {
    type Item = (Option<&'a str>, &'a V);
    type IntoIter = Entries<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Table`]'s entries in insertion order.
#[derive(Clone, Debug)]
pub struct Entries<'a, V> {
    inner: core::slice::Iter<'a, Pair<V>>,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (Option<&'a str>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|pair| (pair.key.as_deref(), &pair.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Entries<'_, V> {}
