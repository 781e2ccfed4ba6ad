//! # Broadcast Alignment
//!
//! Expands parallel input sequences of different lengths to a common length.
//! A shorter sequence repeats its last element, so a value given once applies
//! to every batch item while per-item values line up one-to-one.
//!
//! ```text
//! [a]          → [a, a, a]
//! [b0, b1, b2] → [b0, b1, b2]
//! [c0, c1]     → [c0, c1, c1]
//! ```
//!
//! Repetition is of the last element only, never a cyclic wrap.

use crate::error::{DistributeError, DistributeResult};

/// Returns the common aligned length of named input sequences.
///
/// Fails with [`DistributeError::EmptyInput`] naming the first empty input.
///
/// # Examples
/// ```
/// use edge_distribute::broadcast::aligned_len;
/// assert_eq!(aligned_len(&[("a", 1), ("b", 3), ("c", 1)]).unwrap(), 3);
/// assert!(aligned_len(&[("a", 2), ("b", 0)]).is_err());
/// ```
pub fn aligned_len(lengths: &[(&'static str, usize)]) -> DistributeResult<usize> {
    if let Some((name, _)) = lengths.iter().find(|(_, len)| *len == 0) {
        return Err(DistributeError::empty_input(*name));
    }
    lengths
        .iter()
        .map(|(_, len)| *len)
        .max()
        .ok_or_else(|| DistributeError::empty_input("batch"))
}

/// Returns `seq[min(position, len - 1)]`, or `None` when `seq` is empty.
///
/// # Examples
/// ```
/// use edge_distribute::broadcast::repeat_last;
/// let seq = [10, 20];
/// assert_eq!(repeat_last(&seq, 0), Some(&10));
/// assert_eq!(repeat_last(&seq, 5), Some(&20));
/// ```
#[inline]
pub fn repeat_last<T>(seq: &[T], position: usize) -> Option<&T> {
    let last = seq.len().checked_sub(1)?;
    seq.get(position.min(last))
}

/// Materializes homogeneous sequences to their common aligned length.
///
/// # Examples
/// ```
/// use edge_distribute::broadcast::align;
/// let aligned = align(&[vec![1], vec![1, 2, 3], vec![7]]).unwrap();
/// assert_eq!(aligned[0], vec![1, 1, 1]);
/// assert_eq!(aligned[2], vec![7, 7, 7]);
/// ```
pub fn align<T: Clone>(seqs: &[Vec<T>]) -> DistributeResult<Vec<Vec<T>>> {
    let lengths: Vec<(&'static str, usize)> = seqs.iter().map(|s| ("sequence", s.len())).collect();
    let len = aligned_len(&lengths)?;
    Ok(seqs
        .iter()
        .map(|seq| (0..len).filter_map(|p| repeat_last(seq, p).cloned()).collect())
        .collect())
}
