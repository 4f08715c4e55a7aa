/// Fixed-capacity ring buffer holding the most recent samples of a recurrence
///
/// The write cursor starts at the last slot and moves toward index 0,
/// wrapping around. The slot under the cursor is the newest sample once
/// written; walking forward from the cursor (and wrapping to 0) visits the
/// remaining samples from newest to oldest.
#[derive(Debug, Clone)]
pub struct DelayLine {
    slots: Vec<f64>,
    cursor: usize,
}

impl DelayLine {
    /// Create a zero-filled delay line
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "delay line capacity must be non-zero");
        Self {
            slots: vec![0.0; capacity],
            cursor: capacity - 1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `value` in the slot under the cursor, replacing the oldest sample
    pub fn write(&mut self, value: f64) {
        self.slots[self.cursor] = value;
    }

    /// Visit every slot starting at the cursor, in temporal order newest first
    ///
    /// Before `write`, the first visited slot is the oldest sample about to
    /// be overwritten, so callers wanting only history `skip(1)`.
    pub fn newest_to_oldest(&self) -> impl Iterator<Item = f64> + '_ {
        // Two contiguous ranges instead of per-element modulo arithmetic.
        self.slots[self.cursor..]
            .iter()
            .chain(self.slots[..self.cursor].iter())
            .copied()
    }

    /// Move the cursor to the next slot to be written, wrapping below 0
    pub fn advance(&mut self) {
        self.cursor = match self.cursor {
            0 => self.slots.len() - 1,
            c => c - 1,
        };
    }

    /// Reset all samples to zero and rewind the cursor
    pub fn clear(&mut self) {
        self.slots.fill(0.0);
        self.cursor = self.slots.len() - 1;
    }
}
