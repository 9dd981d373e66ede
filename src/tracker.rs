use crate::window::Window;
use log::trace;

/// The current minimiser of a window: its value and its offset from the oldest value.
///
/// Ties are broken towards the rightmost position (robust winnowing), and once
/// a minimiser is chosen it is only replaced by a strictly smaller value, or
/// when it falls out of the window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tracker<V> {
    value: V,
    offset: usize,
}

impl<V: Ord + Clone> Tracker<V> {
    /// Find the rightmost minimal value of a non-empty window.
    pub fn scan(window: &Window<V>) -> Self {
        let mut it = window.iter().enumerate();
        let (mut offset, mut best) = it.next().expect("window is not empty");
        for (i, v) in it {
            // `<=` so that later equal values win.
            if v <= best {
                offset = i;
                best = v;
            }
        }
        Tracker {
            value: best.clone(),
            offset,
        }
    }

    /// Update after `window` slid by one and `new` was appended.
    ///
    /// Must be called exactly once per slide. When the minimiser was at
    /// offset 0 it just left the window, and the window is rescanned. Returns
    /// true when the minimiser changed position. A rescan always counts as a
    /// change, even when it finds an equal value.
    #[inline(always)]
    pub fn advance(&mut self, new: &V, window: &Window<V>) -> bool {
        if self.at_front() {
            *self = Self::scan(window);
            trace!("rescan: new minimiser at offset {}", self.offset);
            return true;
        }
        if *new < self.value {
            self.value = new.clone();
            self.offset = window.len() - 1;
            return true;
        }
        self.offset -= 1;
        false
    }
}

impl<V> Tracker<V> {
    #[inline(always)]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the minimiser is the oldest value in the window and leaves on the next slide.
    #[inline(always)]
    pub fn at_front(&self) -> bool {
        self.offset == 0
    }
}
