use crate::{
    error::{MinimiserError, Result},
    sequence::ForwardSequence,
    view::MinimiserView,
};
use serde::{Deserialize, Serialize};

/// Parameters of a minimiser view, independent of any input.
///
/// Build it once and apply it to as many inputs as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimiserConfig {
    /// The number of values in one window.
    pub window_size: usize,
}

impl MinimiserConfig {
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Check the window size for use on a single sequence.
    pub fn validate_single(&self) -> Result<()> {
        match self.window_size {
            0 => Err(MinimiserError::EmptyWindow),
            1 => Err(MinimiserError::DegenerateWindow),
            _ => Ok(()),
        }
    }

    /// Check the window size for use on two sequences.
    pub fn validate_dual(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(MinimiserError::EmptyWindow);
        }
        Ok(())
    }

    /// Minimisers of `source`.
    pub fn view<S: ForwardSequence>(&self, source: S) -> Result<MinimiserView<S>> {
        MinimiserView::new(source, self.window_size)
    }

    /// Minimisers of the position-wise minimum of `first` and `second`.
    pub fn dual_view<S1, S2>(&self, first: S1, second: S2) -> Result<MinimiserView<S1, S2>>
    where
        S1: ForwardSequence,
        S2: ForwardSequence<Item = S1::Item>,
    {
        MinimiserView::new_dual(first, second, self.window_size)
    }
}
