//! Rayon-based parallelisation utilities.
//!
//! This module provides helpers for evaluating independent work items
//! (sweep rows, spot vectors) either serially or on the Rayon pool.
//!
//! Results always come back in input order, whichever path is taken.

use rayon::prelude::*;

/// Minimum items handed to one Rayon task.
///
/// Empirically tuned for cache efficiency.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default item count at which work moves onto the Rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Fallible parallel map preserving input order.
///
/// Stops scheduling new items once any item fails. When several items fail,
/// which error is returned is unspecified.
pub fn try_parallel_map<T, R, E, F>(items: &[T], batch_size: usize, mapper: F) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    items
        .par_iter()
        .with_min_len(batch_size.max(1))
        .map(mapper)
        .collect()
}

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParallelConfig {
    /// Minimum items per Rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never leaves the calling thread.
    pub fn serial() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }

    /// Maps `items` through a fallible `mapper`, on the Rayon pool when
    /// [`should_parallelize`](Self::should_parallelize) allows it.
    ///
    /// The serial path stops at the first error.
    pub fn try_map<T, R, E, F>(&self, items: &[T], mapper: F) -> Result<Vec<R>, E>
    where
        T: Sync,
        R: Send,
        E: Send,
        F: Fn(&T) -> Result<R, E> + Sync + Send,
    {
        if self.should_parallelize(items.len()) {
            try_parallel_map(items, self.batch_size, mapper)
        } else {
            items.iter().map(mapper).collect()
        }
    }
}
