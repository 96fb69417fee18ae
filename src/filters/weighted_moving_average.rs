//! Weighted moving average over the history buffer
//!
//! Weights are applied in buffer order: slot 0 always gets the highest weight
//! regardless of which slot holds the newest sample. Once the cursor has
//! wrapped, the emphasis rotates through fixed slots instead of following the
//! most recent sample. Changing this changes the frequency response of the
//! filter.

use super::CombineStrategy;
use crate::common::types::Point3D;
use crate::history::HistoryBuffer;
use crate::weights::WeightTable;

/// Dot product of the buffer with the weight table
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMovingAverage;

impl CombineStrategy for WeightedMovingAverage {
    fn combine(&self, history: &HistoryBuffer, weights: &WeightTable) -> Point3D {
        history
            .slots()
            .iter()
            .zip(weights.as_slice())
            .fold(Point3D::zeros(), |acc, (slot, w)| acc + slot * *w)
    }

    fn name(&self) -> &str {
        "WeightedMovingAverage"
    }
}
