use crate::{
    error::{MinimiserError, Result},
    sequence::ForwardSequence,
};

/// Fails unless both sequences have the same length. Returns that length.
pub fn check_lengths<S1, S2>(first: &S1, second: &S2) -> Result<usize>
where
    S1: ForwardSequence + ?Sized,
    S2: ForwardSequence + ?Sized,
{
    let (first, second) = (first.len(), second.len());
    if first != second {
        return Err(MinimiserError::LengthMismatch { first, second });
    }
    Ok(first)
}

/// One or two cursors that always move together.
///
/// The value at the current position is the primary value, or the minimum of
/// both values when a secondary sequence is present. `current` is `None`
/// once the primary sequence is exhausted.
#[derive(Clone, Debug)]
pub struct DualCursor<I1: Iterator, I2> {
    primary: I1,
    secondary: Option<I2>,
    current: Option<I1::Item>,
    /// Number of steps taken.
    pos: usize,
}

impl<I1, I2> DualCursor<I1, I2>
where
    I1: Iterator + Clone,
    I2: Iterator<Item = I1::Item> + Clone,
    I1::Item: Ord + Clone,
{
    /// Start at the first position.
    ///
    /// The lengths of both sequences must have been checked with [`check_lengths`].
    pub(crate) fn new(mut primary: I1, mut secondary: Option<I2>) -> Self {
        let current = Self::pull(&mut primary, &mut secondary);
        DualCursor {
            primary,
            secondary,
            current,
            pos: 0,
        }
    }

    #[inline(always)]
    fn pull(primary: &mut I1, secondary: &mut Option<I2>) -> Option<I1::Item> {
        let a = primary.next()?;
        match secondary.as_mut().and_then(|s| s.next()) {
            Some(b) => Some(a.min(b)),
            None => Some(a),
        }
    }

    /// Move both cursors one step forward.
    #[inline(always)]
    pub fn advance(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.current = Self::pull(&mut self.primary, &mut self.secondary);
        self.pos += 1;
    }
}

impl<I1: Iterator, I2> DualCursor<I1, I2> {
    /// The value at the current position, `None` at the end.
    #[inline(always)]
    pub fn value(&self) -> Option<&I1::Item> {
        self.current.as_ref()
    }

    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Index of the current position in the primary sequence.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Index of the current position in the secondary sequence, if there is one.
    #[inline(always)]
    pub fn secondary_position(&self) -> Option<usize> {
        self.secondary.as_ref().map(|_| self.pos)
    }

    /// Upper bound on the number of values after the current one.
    #[inline(always)]
    pub fn remaining(&self) -> Option<usize> {
        self.primary.size_hint().1
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::iter::Empty;

    #[test]
    fn single_walks_primary() {
        let mut c = DualCursor::<_, Empty<u32>>::new([3u32, 1, 2].into_iter(), None);
        assert_eq!(c.remaining(), Some(2));
        let mut seen = vec![];
        while let Some(&v) = c.value() {
            seen.push(v);
            c.advance();
        }
        assert_eq!(seen, [3, 1, 2]);
        assert!(c.at_end());
        assert_eq!(c.position(), 3);
        assert_eq!(c.secondary_position(), None);
        // Advancing past the end is a no-op.
        c.advance();
        assert_eq!(c.position(), 3);
    }

    #[test]
    fn dual_takes_elementwise_min() {
        let a = [5u32, 1, 7, 3].into_iter();
        let b = [2u32, 4, 6, 8].into_iter();
        assert_eq!(check_lengths(&a, &b), Ok(4));
        let mut c = DualCursor::new(a, Some(b));
        let mut seen = vec![];
        while let Some(&v) = c.value() {
            seen.push(v);
            assert_eq!(c.secondary_position(), Some(c.position()));
            c.advance();
        }
        assert_eq!(seen, [2, 1, 6, 3]);
    }

    #[test]
    fn dual_rejects_length_mismatch() {
        let a = [1u8, 2, 3].into_iter();
        let b = [1u8, 2].into_iter();
        let err = check_lengths(&a, &b).unwrap_err();
        assert_eq!(err, MinimiserError::LengthMismatch { first: 3, second: 2 });
    }
}
