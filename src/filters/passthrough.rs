//! No-op strategy

use super::CombineStrategy;
use crate::common::types::Point3D;
use crate::history::HistoryBuffer;
use crate::weights::WeightTable;

/// Returns the sample just written at the cursor
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl CombineStrategy for Passthrough {
    fn combine(&self, history: &HistoryBuffer, _weights: &WeightTable) -> Point3D {
        history.current()
    }

    fn name(&self) -> &str {
        "Passthrough"
    }
}
