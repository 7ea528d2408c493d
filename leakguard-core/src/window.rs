//! Fixed-Size Trailing-Mean Window for Value Smoothing
//!
//! ## Overview
//!
//! The cleaning stage smooths the value series with a trailing moving
//! average before the line fit sees it. This module provides the ring
//! buffer backing that average: fixed capacity chosen at compile time
//! through const generics, no heap allocation, deterministic cost per
//! sample.
//!
//! ## Design Rationale
//!
//! ### Shrinking start-up window
//!
//! A conventional moving average is undefined until the window fills,
//! which would silently discard the first `N - 1` training points of an
//! already-short history. Instead the mean is taken over however many
//! samples have been seen so far:
//!
//! ```text
//! output[0] = input[0]
//! output[1] = (input[0] + input[1]) / 2
//! ...
//! output[k] = mean(last min(N, k + 1) inputs)
//! ```
//!
//! so every cleaned entry yields a smoothed value.
//!
//! ### Why recompute the mean per push?
//!
//! A running sum would make `push` O(1) instead of O(N), but repeated
//! add/subtract of `f32` terms accumulates drift and makes the output
//! depend on how many samples passed through before the window. Summing
//! the at-most-N live samples in `f64` keeps the result exactly
//! reproducible for a given input series, which the cleaning stage
//! guarantees to its callers. For N = 10 the extra cost is noise.

/// Ring buffer producing a trailing mean over the last `N` samples
///
/// When full, each push overwrites the oldest sample, maintaining a
/// sliding window over the most recent `N` values.
#[derive(Debug, Clone)]
pub struct SmoothingWindow<const N: usize> {
    /// Sample storage; only the first `len` slots are live until full
    data: [f32; N],

    /// Index where the next write will occur, wraps at `N`
    write_pos: usize,

    /// Current number of live samples, increases until `N` then stays
    len: usize,
}

impl<const N: usize> SmoothingWindow<N> {
    /// Creates an empty window
    pub const fn new() -> Self {
        Self {
            data: [0.0; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Push a sample and return the trailing mean over the occupied window
    pub fn push(&mut self, sample: f32) -> f32 {
        self.data[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }

        // Mean is position-independent, so iterate storage order directly
        let mut sum = 0.0f64;
        for slot in &self.data[..self.len] {
            sum += *slot as f64;
        }
        (sum / self.len as f64) as f32
    }

    /// Number of live samples
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no samples have been pushed
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the window has reached full width
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Discard all samples
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.len = 0;
    }
}

impl<const N: usize> Default for SmoothingWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}
