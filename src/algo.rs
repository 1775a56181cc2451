//! Randomized partition sort.
//!
//! An in-place comparison sort in the Quicksort family:
//! - **Random pivot**: every partition step draws its pivot uniformly from the current range,
//!   so presorted or reverse-sorted input does not degrade to quadratic time in practice.
//! - **Two-pointer partition**: a left cursor skips elements `<= pivot`, a right cursor skips
//!   elements `>= pivot`, and the two are exchanged until the cursors meet.
//! - **Bounded stack**: the smaller side is recursed into and the larger side is looped over.
//!
//! The sort is not stable. Average cost is O(n log n), worst case O(n²) (for example when
//! every element compares equal).
//!
//! The main entry points are [`partition_sort`], [`partition_sort_by`] and
//! [`partition_sort_by_with_rng`].

use crate::error::{Error, Result};
use rand::Rng;
use std::cmp::Ordering;

/// Sorts a mutable slice in-place into non-decreasing order.
///
/// Pivots are drawn from the thread-local generator. Use [`partition_sort_by_with_rng`]
/// for reproducible runs.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when `data` is empty.
///
/// # Examples
///
/// ```
/// use wordhoard::partition_sort;
///
/// let mut data = vec!["banana", "apple", "cherry"];
/// partition_sort(&mut data).unwrap();
///
/// assert_eq!(data, vec!["apple", "banana", "cherry"]);
/// ```
pub fn partition_sort<T: Ord>(data: &mut [T]) -> Result<()> {
    partition_sort_by(data, T::cmp)
}

/// Sorts a mutable slice in-place with a comparator.
///
/// `compare` must describe a total order; the result is non-decreasing with respect to it.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when `data` is empty.
///
/// # Examples
///
/// ```
/// use wordhoard::partition_sort_by;
///
/// let mut data = vec!["ccc", "a", "bb"];
/// partition_sort_by(&mut data, |a, b| b.len().cmp(&a.len())).unwrap();
///
/// assert_eq!(data, vec!["ccc", "bb", "a"]);
/// ```
pub fn partition_sort_by<T, F>(data: &mut [T], compare: F) -> Result<()>
where
    F: FnMut(&T, &T) -> Ordering,
{
    partition_sort_by_with_rng(data, &mut rand::rng(), compare)
}

/// Sorts a mutable slice in-place with a comparator, drawing pivots from `rng`.
///
/// Two calls with identically seeded generators perform the same sequence of exchanges.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] when `data` is empty.
pub fn partition_sort_by_with_rng<T, R, F>(
    data: &mut [T],
    rng: &mut R,
    mut compare: F,
) -> Result<()>
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    quicksort(data, rng, &mut compare);
    Ok(())
}

/// Sorts `v` by repeated partitioning.
///
/// Recurses into the shorter side of each split and continues the loop on the longer one.
fn quicksort<T, R, F>(mut v: &mut [T], rng: &mut R, compare: &mut F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        let last = v.len() - 1;
        let pivot = rng.random_range(0..v.len());
        v.swap(pivot, last);

        let mid = partition(v, compare);

        let (lower, rest) = std::mem::take(&mut v).split_at_mut(mid);
        let upper = &mut rest[1..];

        if lower.len() < upper.len() {
            quicksort(lower, rng, compare);
            v = upper;
        } else {
            quicksort(upper, rng, compare);
            v = lower;
        }
    }
}

/// Partitions `v` around its last element and returns the pivot's final index.
///
/// On return every element before the index compares `<=` the pivot and every element
/// after it compares `>=` the pivot.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = v.len() - 1;
    let mut left = 0;
    let mut right = high;

    while left < right {
        while left < right && compare(&v[high], &v[left]) != Ordering::Less {
            left += 1;
        }
        while right > left && compare(&v[high], &v[right]) != Ordering::Greater {
            right -= 1;
        }

        // May exchange an element with itself once the cursors have met.
        v.swap(left, right);
    }

    v.swap(left, high);
    left
}
