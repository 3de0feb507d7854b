/// Cursor over the question set.
///
/// `current_index` is both the number of solved puzzles and the position of
/// the puzzle being presented. It may equal the set length, which means the
/// run is complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    current_index: usize,
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self { current_index: 0 }
    }

    #[must_use]
    pub fn at(current_index: usize) -> Self {
        Self { current_index }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Move forward by one solved puzzle and return the new index.
    pub fn advance(&mut self) -> usize {
        self.current_index = self.current_index.saturating_add(1);
        self.current_index
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    /// Pull the cursor back inside a store that shrank to `len` entries.
    ///
    /// Only repairs an index at or past `len`; returns whether it changed.
    pub fn clamp_to(&mut self, len: usize) -> bool {
        if self.current_index < len {
            return false;
        }
        let clamped = len.saturating_sub(1);
        let changed = clamped != self.current_index;
        self.current_index = clamped;
        changed
    }

    #[must_use]
    pub fn is_complete(&self, len: usize) -> bool {
        len > 0 && self.current_index >= len
    }
}
