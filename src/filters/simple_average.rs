//! Unweighted mean over the history buffer

use super::CombineStrategy;
use crate::common::types::Point3D;
use crate::history::HistoryBuffer;
use crate::weights::WeightTable;

/// Arithmetic mean of every slot
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAverage;

impl CombineStrategy for SimpleAverage {
    fn combine(&self, history: &HistoryBuffer, _weights: &WeightTable) -> Point3D {
        let sum = history
            .slots()
            .iter()
            .fold(Point3D::zeros(), |acc, slot| acc + slot);
        sum / history.len() as f64
    }

    fn name(&self) -> &str {
        "SimpleAverage"
    }
}
