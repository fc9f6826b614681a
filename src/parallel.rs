//! Row-wise iteration that fans out over rayon when the `parallel` feature is
//! enabled.
//!
//! Each callback receives the row index and its own disjoint output row, so
//! workers only ever read shared input and write separate memory.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Run `f(y, row)` for every `row_len`-sized row of `data`.
///
/// `row_len` must be non-zero.
pub(crate) fn for_each_row_mut<T, F>(data: &mut [T], row_len: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    debug_assert!(row_len > 0, "row length must be positive");
    #[cfg(feature = "parallel")]
    {
        data.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        data.chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
}
