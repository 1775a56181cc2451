//! # Wordhoard
//!
//! `wordhoard` is a small in-memory word list: it loads one word per line into a deduplicated,
//! lowercase set and answers listing, filtering, sampling and membership queries over it.
//!
//! Alphabetical listings are produced by a randomized partition sort (a Quicksort variant
//! that draws a fresh pivot for every partition), which is also exported for use on any
//! slice.
//!
//! ## Key Features
//!
//! - **Deduplicated ingest**: every line is lowercased on the way in, so `Cat` and `CAT`
//!   collapse into `cat`.
//! - **Owned snapshots**: listings return a fresh `Vec<String>`; the store itself is never
//!   mutated after construction and can be shared across threads.
//! - **Reproducible randomness**: every randomized operation has a `*_with_rng` form that
//!   takes a caller-owned [`rand::Rng`], so seeded runs are repeatable.
//! - **Bundled list**: [`WordStore::embedded`] loads the word list compiled into the crate.
//!
//! ## Usage
//!
//! ### Building a store
//!
//! ```rust
//! use wordhoard::WordStore;
//!
//! let store = WordStore::from_lines(["Cat", "cat", "CAT", "dog"]);
//!
//! assert_eq!(store.len(), 2);
//! assert!(store.contains("cat"));
//! assert_eq!(store.to_sorted_vec(), vec!["cat", "dog"]);
//! ```
//!
//! ### Queries
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordhoard::WordStore;
//!
//! let store = WordStore::from_lines(["a", "bb", "ccc"]);
//!
//! let mut short = store.filter_by_size(2).unwrap();
//! short.sort();
//! assert_eq!(short, vec!["a", "bb"]);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let word = store.random_word_with_rng(&mut rng).unwrap();
//! assert!(store.contains(word));
//! ```
//!
//! ### Sorting arbitrary slices
//!
//! ```rust
//! use wordhoard::partition_sort;
//!
//! let mut data = vec!["cherry", "apple", "banana"];
//! partition_sort(&mut data).unwrap();
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry"]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Sorted listing**: O(n log n) on average, O(n²) in the worst case (all keys equal).
//! - **Unsorted listing, size filter, random pick**: O(n).
//! - **Membership**: O(1) per word.
//!
//! ## Errors
//!
//! Fallible operations return [`Result`], with [`Error`] distinguishing a missing or
//! unreadable source, an out-of-range argument, and an empty sort input.

pub mod algo;
pub mod error;
pub mod loader;
pub mod store;

pub use algo::{partition_sort, partition_sort_by, partition_sort_by_with_rng};
pub use error::{Error, Result};
pub use store::WordStore;

pub mod prelude {
    pub use crate::algo::{partition_sort, partition_sort_by, partition_sort_by_with_rng};
    pub use crate::error::{Error, Result};
    pub use crate::store::WordStore;
}
