//! Frequency counting with deterministic "most common N".

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of keys, remembering the order keys were first seen.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn count(&self, key: &K) -> usize {
        self.index.get(key).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every key, most frequent first.
    pub fn ranked(&self) -> Ranking<K> {
        self.most_common(usize::MAX)
    }

    /// The `n` most frequent keys.
    ///
    /// Sorted by descending count. Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Ranking<K> {
        let mut entries: Vec<RankEntry<K>> = self
            .entries
            .iter()
            .map(|(key, count)| RankEntry {
                key: key.clone(),
                count: *count,
            })
            .collect();
        // stable sort keeps insertion order among ties
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(n);
        Ranking { entries }
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}

/// One row of a [`Ranking`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry<K> {
    pub key: K,
    pub count: usize,
}

/// Keys ordered by descending count; ties broken by first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking<K> {
    entries: Vec<RankEntry<K>>,
}

impl<K> Default for Ranking<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K> Ranking<K> {
    pub fn entries(&self) -> &[RankEntry<K>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankEntry<K>> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&RankEntry<K>> {
        self.entries.first()
    }
}

impl<'a, K> IntoIterator for &'a Ranking<K> {
    type Item = &'a RankEntry<K>;
    type IntoIter = std::slice::Iter<'a, RankEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
