/// A fixed size window of the most recent values, oldest first.
///
/// Backed by a ring buffer: `slide` overwrites the oldest slot in place, so
/// no allocation happens after priming.
#[derive(Clone, Debug)]
pub struct Window<V> {
    /// Index of the oldest value in `data`.
    idx: usize,
    data: Vec<V>,
}

impl<V: Clone> Window<V> {
    /// Fill a window with up to `capacity` values pulled from `values`.
    ///
    /// The window is shorter than `capacity` when `values` runs out first.
    pub fn prime(capacity: usize, values: impl IntoIterator<Item = V>) -> Self {
        let data: Vec<V> = values.into_iter().take(capacity).collect();
        Window { idx: 0, data }
    }

    /// Drop the oldest value and append `v`. Returns the dropped value.
    #[inline(always)]
    pub fn slide(&mut self, v: V) -> V {
        assert!(!self.data.is_empty(), "Cannot slide an empty window.");
        let old = std::mem::replace(&mut self.data[self.idx], v);
        self.idx += 1;
        if self.idx == self.data.len() {
            self.idx = 0;
        }
        old
    }
}

impl<V> Window<V> {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The value at `offset`, counted from the oldest value.
    #[inline(always)]
    pub fn get(&self, offset: usize) -> Option<&V> {
        if offset >= self.data.len() {
            return None;
        }
        let mut i = self.idx + offset;
        if i >= self.data.len() {
            i -= self.data.len();
        }
        self.data.get(i)
    }

    /// The two contiguous parts of the buffer, in window order.
    pub fn forward_slices(&self) -> [&[V]; 2] {
        let (a, b) = self.data.split_at(self.idx);
        [b, a]
    }

    /// Iterate the window oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &V> + Clone + '_ {
        let [b, a] = self.forward_slices();
        b.iter().chain(a)
    }
}
