//! The two capabilities a minimiser view needs from its input.

/// A value with a total order that can be stored in a window.
///
/// Typically a kmer hash such as `u64`.
pub trait TotallyOrdered: Ord + Clone {}

impl<T: Ord + Clone> TotallyOrdered for T {}

/// A forward, re-enterable sequence of totally ordered values.
///
/// `cursor` hands out an independent cursor at the start of the sequence.
/// Any number of cursors may exist at the same time; none of them modifies
/// the underlying data.
pub trait ForwardSequence {
    type Item: TotallyOrdered;
    type Cursor: Iterator<Item = Self::Item> + Clone;

    /// A fresh cursor at the first value.
    fn cursor(&self) -> Self::Cursor;

    /// Number of values in the sequence.
    ///
    /// Uses the size hint when it is exact, and otherwise walks a copy of the
    /// cursor, which evaluates every value and any adaptor producing it.
    fn len(&self) -> usize {
        let cursor = self.cursor();
        match cursor.size_hint() {
            (lo, Some(hi)) if lo == hi => lo,
            _ => cursor.count(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every cloneable iterator is a forward sequence: cloning it gives a new cursor.
impl<I> ForwardSequence for I
where
    I: Iterator + Clone,
    I::Item: TotallyOrdered,
{
    type Item = I::Item;
    type Cursor = I;

    #[inline(always)]
    fn cursor(&self) -> I {
        self.clone()
    }
}
