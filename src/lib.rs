//! Lazy minimisers of a stream of totally ordered values.
//!
//! A minimiser is the smallest value in a window of `w` consecutive values.
//! For the values `[28, 100, 9, 23, 4, 1, 72, 37, 8]` and `w = 4`, the
//! minimisers are `[9, 4, 1]`: each value is reported once, when it becomes
//! the minimiser.
//!
//! Ties are broken by robust winnowing: the rightmost of several equal minimal
//! values is chosen, and it is only replaced by a strictly smaller value or
//! when it leaves the window.
//!
//! Minimisers can also be computed over two sequences of equal length, where
//! the value at each position is the minimum of both (e.g. the forward and
//! reverse-complement hash of each kmer).
//!
//! ```
//! use robust_minimisers::MinimiserExt;
//!
//! let hashes = [28u64, 100, 9, 23, 4, 1, 72, 37, 8];
//! let view = hashes.iter().copied().minimisers(4).unwrap();
//! assert_eq!(view.iter().collect::<Vec<_>>(), [9, 4, 1]);
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod kmer;
pub mod sequence;
pub mod tracker;
pub mod view;
pub mod window;

pub use config::MinimiserConfig;
pub use error::{MinimiserError, Result};
pub use sequence::{ForwardSequence, TotallyOrdered};
pub use view::{MinimiserIter, MinimiserView};

/// Minimisers of `source` with windows of `window_size` values.
///
/// Fails when `window_size < 2`.
pub fn minimisers<I>(source: I, window_size: usize) -> Result<MinimiserView<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: TotallyOrdered,
{
    MinimiserView::new(source.into_iter(), window_size)
}

/// Minimisers of the position-wise minimum of `first` and `second`.
///
/// Fails when the two inputs differ in length or `window_size == 0`.
pub fn minimisers_dual<I1, I2>(
    first: I1,
    second: I2,
    window_size: usize,
) -> Result<MinimiserView<I1::IntoIter, I2::IntoIter>>
where
    I1: IntoIterator,
    I2: IntoIterator<Item = I1::Item>,
    I1::IntoIter: Clone,
    I2::IntoIter: Clone,
    I1::Item: TotallyOrdered,
{
    MinimiserView::new_dual(first.into_iter(), second.into_iter(), window_size)
}

/// Adds `.minimisers(w)` to every cloneable iterator over ordered values.
pub trait MinimiserExt: Iterator + Clone + Sized {
    fn minimisers(self, window_size: usize) -> Result<MinimiserView<Self>>
    where
        Self::Item: TotallyOrdered,
    {
        MinimiserView::new(self, window_size)
    }

    /// Minimisers of the position-wise minimum of `self` and `other`.
    fn minimisers_with<I>(self, other: I, window_size: usize) -> Result<MinimiserView<Self, I>>
    where
        Self::Item: TotallyOrdered,
        I: Iterator<Item = Self::Item> + Clone,
    {
        MinimiserView::new_dual(self, other, window_size)
    }
}

impl<I: Iterator + Clone> MinimiserExt for I {}

#[cfg(test)]
#[ctor::ctor]
fn init_color_backtrace() {
    color_backtrace::install();
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use itertools::Itertools;

    /// Minimisers by rescanning every window, tracking the absolute position
    /// of the minimiser.
    pub fn naive_minimisers(values: &[u64], w: usize) -> Vec<u64> {
        let w = w.min(values.len());
        if w == 0 {
            return vec![];
        }
        // Rightmost minimum of the window starting at `lo`.
        let argmin = |lo: usize| {
            (lo..lo + w)
                .rev()
                .min_by_key(|&i| values[i])
                .expect("w > 0")
        };
        let mut pos = argmin(0);
        let mut out = vec![values[pos]];
        for lo in 1..=values.len() - w {
            let new = lo + w - 1;
            if pos < lo {
                pos = argmin(lo);
                out.push(values[pos]);
            } else if values[new] < values[pos] {
                pos = new;
                out.push(values[pos]);
            }
        }
        out
    }

    /// The minimum of every window.
    pub fn window_minima(values: &[u64], w: usize) -> Vec<u64> {
        values
            .windows(w)
            .map(|win| *win.iter().min().expect("w > 0"))
            .collect_vec()
    }

    #[test]
    fn free_functions_and_ext() {
        let s1 = vec![28u64, 100, 9, 23, 4, 1, 72, 37, 8];
        let s2 = vec![30u64, 2, 11, 101, 199, 73, 34, 900, 901];
        let view = minimisers(&s1, 4).unwrap();
        assert_eq!(view.iter().copied().collect_vec(), [9, 4, 1]);
        let view = minimisers_dual(s1[..8].iter().copied(), s2[..8].iter().copied(), 3).unwrap();
        assert_eq!(view.iter().collect_vec(), [2, 4, 1]);

        let view = s1.iter().copied().minimisers(4).unwrap();
        assert!(!view.is_dual());
        assert_eq!(view.window_size(), 4);
        let view = s1
            .iter()
            .copied()
            .minimisers_with(s2.iter().copied(), 4)
            .unwrap();
        assert!(view.is_dual());
        assert_eq!(view.iter().collect_vec(), [2, 1]);

        assert_eq!(
            s1.iter().copied().minimisers(1).unwrap_err(),
            MinimiserError::DegenerateWindow
        );
        assert!(matches!(
            s1.iter()
                .copied()
                .minimisers_with(s2[..3].iter().copied(), 3),
            Err(MinimiserError::LengthMismatch { first: 9, second: 3 })
        ));
    }

    #[test]
    fn naive_reference() {
        assert_eq!(naive_minimisers(&[28, 100, 9, 23, 4, 1, 72, 37, 8], 4), [9, 4, 1]);
        assert_eq!(naive_minimisers(&[5, 5, 5, 1, 5, 5], 2), [5, 1, 5]);
        assert_eq!(naive_minimisers(&[3, 1, 4, 1, 5], 3), [1, 1]);
        assert_eq!(naive_minimisers(&[7, 3, 9], 5), [3]);
        assert_eq!(window_minima(&[5, 5, 5, 1, 5, 5], 2), [5, 5, 1, 1, 5]);
    }
}
