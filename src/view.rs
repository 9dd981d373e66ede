use crate::{
    config::MinimiserConfig,
    cursor::{check_lengths, DualCursor},
    error::Result,
    sequence::ForwardSequence,
    tracker::Tracker,
    window::Window,
};
use log::debug;
use std::iter::{Empty, FusedIterator};

/// A lazy view of the minimisers of one sequence, or of two sequences of equal length.
///
/// The view only stores its input and the window size. Every call to
/// [`MinimiserView::iter`] starts an independent pass over the input.
///
/// With two sequences, the value at each position is the minimum of both
/// values, e.g. the forward and reverse-complement hash of a kmer.
#[derive(Clone, Debug)]
pub struct MinimiserView<S1: ForwardSequence, S2 = Empty<<S1 as ForwardSequence>::Item>> {
    first: S1,
    second: Option<S2>,
    window_size: usize,
}

impl<S1: ForwardSequence> MinimiserView<S1> {
    /// Minimisers of a single sequence.
    ///
    /// A window size of 1 is rejected: every value would be its own minimiser.
    pub fn new(source: S1, window_size: usize) -> Result<Self> {
        MinimiserConfig::new(window_size).validate_single()?;
        debug!("Minimiser view with window size {window_size}.");
        Ok(MinimiserView {
            first: source,
            second: None,
            window_size,
        })
    }
}

impl<S1, S2> MinimiserView<S1, S2>
where
    S1: ForwardSequence,
    S2: ForwardSequence<Item = S1::Item>,
{
    /// Minimisers of the position-wise minimum of two sequences.
    ///
    /// Fails when the lengths differ. Inputs with an exact size hint are not
    /// read at all. Other inputs are walked once on a cloned cursor to count
    /// them, which runs any upstream adaptors, but no minimiser is computed.
    pub fn new_dual(first: S1, second: S2, window_size: usize) -> Result<Self> {
        MinimiserConfig::new(window_size).validate_dual()?;
        let len = check_lengths(&first, &second)?;
        debug!("Dual minimiser view with window size {window_size} over {len} values.");
        Ok(MinimiserView {
            first,
            second: Some(second),
            window_size,
        })
    }

    /// The window size as requested; each pass clamps it to the input length.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn is_dual(&self) -> bool {
        self.second.is_some()
    }

    /// Start a new pass over the minimisers.
    ///
    /// A window larger than the input is clamped to it while priming.
    pub fn iter(&self) -> MinimiserIter<S1::Cursor, S2::Cursor> {
        let cursor = DualCursor::new(
            self.first.cursor(),
            self.second.as_ref().map(|s| s.cursor()),
        );
        MinimiserIter::start(cursor, self.window_size)
    }
}

impl<'a, S1, S2> IntoIterator for &'a MinimiserView<S1, S2>
where
    S1: ForwardSequence,
    S2: ForwardSequence<Item = S1::Item>,
{
    type Item = S1::Item;
    type IntoIter = MinimiserIter<S1::Cursor, S2::Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One pass over the minimisers of a [`MinimiserView`].
///
/// Yields the minimiser of the first window, and afterwards a value each time
/// the minimiser changes. Among equal values the rightmost one is the
/// minimiser, and it stays so until a strictly smaller value enters the
/// window or it leaves the window (robust winnowing).
///
/// A change is tracked by position, not by value: when the minimiser leaves
/// the window and an equal value remains, that value is yielded again.
///
/// Cloning gives an independent pass at the same position.
#[derive(Clone, Debug)]
pub struct MinimiserIter<I1: Iterator, I2 = Empty<<I1 as Iterator>::Item>> {
    /// Points at the rightmost value of the window.
    cursor: DualCursor<I1, I2>,
    window: Window<I1::Item>,
    /// `None` once the input is exhausted.
    tracker: Option<Tracker<I1::Item>>,
}

impl<I1, I2> MinimiserIter<I1, I2>
where
    I1: Iterator + Clone,
    I2: Iterator<Item = I1::Item> + Clone,
    I1::Item: Ord + Clone,
{
    /// Fill the first window and find its minimiser.
    ///
    /// The window holds fewer than `window_size` values when the input is shorter.
    fn start(mut cursor: DualCursor<I1, I2>, window_size: usize) -> Self {
        let window = Window::prime(
            window_size,
            (0..window_size).map_while(|i| {
                if i > 0 {
                    cursor.advance();
                }
                cursor.value().cloned()
            }),
        );
        let tracker = (!window.is_empty()).then(|| Tracker::scan(&window));
        MinimiserIter {
            cursor,
            window,
            tracker,
        }
    }

    /// Slide the window until the minimiser changes or the input ends.
    ///
    /// This is the `step` operation of a pass; [`Iterator::next`] yields the
    /// current minimiser and then calls it.
    pub fn advance_minimiser(&mut self) {
        let Some(tracker) = self.tracker.as_mut() else {
            return;
        };
        loop {
            self.cursor.advance();
            let Some(new) = self.cursor.value().cloned() else {
                self.tracker = None;
                return;
            };
            self.window.slide(new.clone());
            if tracker.advance(&new, &self.window) {
                return;
            }
        }
    }
}

impl<I1: Iterator, I2> MinimiserIter<I1, I2> {
    /// The current minimiser, `None` once the input is exhausted.
    #[inline(always)]
    pub fn current(&self) -> Option<&I1::Item> {
        self.tracker.as_ref().map(Tracker::value)
    }

    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.tracker.is_none()
    }

    /// Index in the primary input of the rightmost value of the current window.
    ///
    /// Equals the input length once exhausted.
    pub fn base(&self) -> usize {
        self.cursor.position()
    }

    /// Number of values in the current window.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }
}

impl<I1, I2> Iterator for MinimiserIter<I1, I2>
where
    I1: Iterator + Clone,
    I2: Iterator<Item = I1::Item> + Clone,
    I1::Item: Ord + Clone,
{
    type Item = I1::Item;

    #[inline(always)]
    fn next(&mut self) -> Option<I1::Item> {
        let v = self.current()?.clone();
        self.advance_minimiser();
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.at_end() {
            (0, Some(0))
        } else {
            // The current window plus one per remaining value.
            (1, self.cursor.remaining().and_then(|r| r.checked_add(1)))
        }
    }
}

impl<I1, I2> FusedIterator for MinimiserIter<I1, I2>
where
    I1: Iterator + Clone,
    I2: Iterator<Item = I1::Item> + Clone,
    I1::Item: Ord + Clone,
{
}

/// Two passes are equal when both cursors are at the same positions and
/// their windows have the same size.
impl<I1: Iterator, I2> PartialEq for MinimiserIter<I1, I2> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor.position() == other.cursor.position()
            && self.cursor.secondary_position() == other.cursor.secondary_position()
            && self.window.len() == other.window.len()
    }
}

impl<I1: Iterator, I2> Eq for MinimiserIter<I1, I2> {}
