//! The word store.
//!
//! [`WordStore`] owns a deduplicated set of lowercase words. It is built once and is read-only
//! afterwards; every query hands back a fresh, owned snapshot instead of exposing the set.

use crate::algo;
use crate::error::{Error, Result};
use crate::loader;
use rand::Rng;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::io::BufRead;
use std::iter::FusedIterator;
use std::path::Path;

/// Starting capacity of the buffer that collects size-filtered words.
const FILTER_INITIAL_CAPACITY: usize = 32;

/// A deduplicated, lowercase word list.
///
/// Storage is a [`HashSet`], so unsorted listings follow hash order and must not be relied
/// upon. The store is `Send + Sync`: every query takes `&self` and only reads the set, so a
/// shared store can be queried from several threads without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStore {
    words: HashSet<String>,
}

impl WordStore {
    /// Builds a store from raw lines.
    ///
    /// Each line is lowercased and treated as one word. Duplicates (including those that only
    /// differ by case) collapse into a single entry.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        let words: HashSet<String> = lines
            .into_iter()
            .inspect(|_| seen += 1)
            .map(|line| line.as_ref().to_lowercase())
            .collect();

        tracing::debug!(lines = seen, words = words.len(), "Built word store");
        Self { words }
    }

    /// Builds a store from the bundled word list.
    pub fn embedded() -> Self {
        Self::from_lines(loader::embedded_lines())
    }

    /// Builds a store from a word list file, one word per line.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the file does not exist, [`Error::Unreadable`] if it cannot be
    /// opened or reading fails part way. No store is produced in either case.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let lines = loader::read_file(path)?;
        Ok(Self::from_lines(lines))
    }

    /// Builds a store from any buffered reader, one word per line.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the reader fails before reaching the end.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = loader::read_lines(reader)?;
        Ok(Self::from_lines(lines))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the store holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is stored exactly as given.
    ///
    /// Entries are lowercase, so a word with uppercase letters never matches.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns `true` if every word in `words` is stored. An empty query is always satisfied.
    pub fn contains_all<I, S>(&self, words: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().all(|w| self.contains(w.as_ref()))
    }

    /// Lazily walks the stored words in hash order.
    ///
    /// Each call starts a new pass.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.words.iter(),
        }
    }

    /// Copies every word into a new vector, in hash order.
    pub fn to_vec(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Copies every word into a new vector sorted in ascending ordinal order.
    ///
    /// Sorting is redone on every call.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        self.to_sorted_vec_with_rng(&mut rand::rng())
    }

    /// Like [`to_sorted_vec`](Self::to_sorted_vec), drawing sort pivots from `rng`.
    pub fn to_sorted_vec_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut words = self.to_vec();
        if words.is_empty() {
            return words;
        }

        let sorted = algo::partition_sort_by_with_rng(&mut words, rng, String::cmp);
        debug_assert!(sorted.is_ok(), "sorter rejected a non-empty snapshot");
        words
    }

    /// Returns every word of at most `max` characters, in hash order.
    ///
    /// Length is counted in Unicode scalar values (`char`s), not UTF-16 code units, so a
    /// character outside the Basic Multilingual Plane counts once.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `max` is zero or negative.
    pub fn filter_by_size(&self, max: isize) -> Result<Vec<String>> {
        if max <= 0 {
            tracing::debug!(max, "Rejected size filter");
            return Err(Error::invalid_argument(format!(
                "maximum word length must be positive, got {max}"
            )));
        }
        let max = max.unsigned_abs();

        let mut matches: Vec<String> = Vec::with_capacity(FILTER_INITIAL_CAPACITY);
        for word in &self.words {
            if word.chars().count() > max {
                continue;
            }
            if matches.len() == matches.capacity() {
                matches.reserve_exact(matches.capacity());
            }
            matches.push(word.clone());
        }

        matches.shrink_to_fit();
        Ok(matches)
    }

    /// Picks a word uniformly at random, or `None` when the store is empty.
    pub fn random_word(&self) -> Option<&str> {
        self.random_word_with_rng(&mut rand::rng())
    }

    /// Like [`random_word`](Self::random_word), drawing from `rng`.
    pub fn random_word_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }

        let index = rng.random_range(0..self.words.len());
        self.words.iter().nth(index).map(String::as_str)
    }
}

impl Default for WordStore {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

impl<'a> IntoIterator for &'a WordStore {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the unsorted listing as `[first, second, ...]`.
impl fmt::Display for WordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, word) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(word)?;
        }
        f.write_str("]")
    }
}

/// Borrowing iterator over a [`WordStore`], created by [`WordStore::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_set::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
