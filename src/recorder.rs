//! Bounded log of raw and filtered samples
//!
//! Keeps the most recent `capacity` updates so filtered output can be
//! compared against the unfiltered input.

use crate::common::types::Point3D;
use crate::smoothing::EntityKind;
use std::collections::VecDeque;

/// One recorded update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    pub kind: EntityKind,
    pub raw: Point3D,
    pub filtered: Point3D,
}

impl SampleRecord {
    /// Distance the filter moved the raw sample
    pub fn correction(&self) -> f64 {
        (self.filtered - self.raw).norm()
    }
}

#[derive(Debug, Clone)]
pub struct SampleRecorder {
    capacity: usize,
    entries: VecDeque<SampleRecord>,
}

impl SampleRecorder {
    /// Create a recorder holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        SampleRecorder {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an entry, dropping the oldest once full
    pub fn record(&mut self, kind: EntityKind, raw: Point3D, filtered: Point3D) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(SampleRecord { kind, raw, filtered });
    }

    /// Entries from oldest to newest
    pub fn entries(&self) -> impl Iterator<Item = &SampleRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Mean distance between raw and filtered samples of one kind
    pub fn mean_correction(&self, kind: EntityKind) -> Option<f64> {
        let (sum, count) = self
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .fold((0.0, 0usize), |(sum, count), e| (sum + e.correction(), count + 1));

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}
