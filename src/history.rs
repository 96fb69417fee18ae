//! Fixed-length circular history of filtered joint positions

use crate::common::types::Point3D;

/// Circular buffer of 3D samples with a single write cursor
///
/// The buffer never grows. The cursor points at the slot the next sample
/// will be written to and wraps modulo the buffer length.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBuffer {
    slots: Vec<Point3D>,
    cursor: usize,
}

impl HistoryBuffer {
    /// Create a zero-filled buffer with `len` slots (`len >= 1`)
    pub(crate) fn new(len: usize) -> Self {
        debug_assert!(len >= 1, "history buffer needs at least one slot");
        HistoryBuffer {
            slots: vec![Point3D::zeros(); len],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the slot the next write lands in
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sample at the cursor slot
    pub fn current(&self) -> Point3D {
        self.slots[self.cursor]
    }

    pub fn get(&self, index: usize) -> Option<&Point3D> {
        self.slots.get(index)
    }

    /// All slots in buffer order (not recency order)
    pub fn slots(&self) -> &[Point3D] {
        &self.slots
    }

    /// Overwrite the cursor slot without moving the cursor
    pub fn write(&mut self, sample: Point3D) {
        self.slots[self.cursor] = sample;
    }

    /// Move the cursor to the next slot
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Zero every slot and rewind the cursor
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Point3D::zeros();
        }
        self.cursor = 0;
    }
}
