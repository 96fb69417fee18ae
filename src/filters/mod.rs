//! Combination strategies for history-based smoothing
//!
//! A strategy turns the full contents of a history buffer into one output
//! sample. `SmoothingFilter` owns the buffers and cursors, strategies only
//! read them.

use crate::common::types::Point3D;
use crate::history::HistoryBuffer;
use crate::weights::WeightTable;
use std::fmt::Debug;

/// Trait for history combination algorithms
pub trait CombineStrategy: Debug + Send + Sync {
    /// Combine the buffer into one sample. The slot at the buffer cursor
    /// holds the raw sample of the current update.
    fn combine(&self, history: &HistoryBuffer, weights: &WeightTable) -> Point3D;

    /// Get the name of this strategy
    fn name(&self) -> &str;
}

// Re-export specific implementations
pub mod passthrough;
pub mod simple_average;
pub mod weighted_moving_average;

pub use passthrough::Passthrough;
pub use simple_average::SimpleAverage;
pub use weighted_moving_average::WeightedMovingAverage;

/// Selectable filter modes
///
/// Only `SimpleAverage`, `WeightedMovingAverage` and `None` have a
/// combination rule. The remaining variants can be named in configuration
/// but updating a filter in one of them fails with `NotImplemented`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    SimpleAverage,
    #[default]
    WeightedMovingAverage,
    DoubleMovingAverage,
    ExponentialSmoothing,
    DoubleExponentialSmoothing,
    AdaptiveDoubleExponentialSmoothing,
    TaylorSeries,
    Kalman,
    Median,
    JitterRemoval,
    Combination1,
    Combination2,
    /// Raw samples pass through unchanged
    None,
}

impl FilterMode {
    /// Strategy implementing this mode, if any
    pub fn strategy(self) -> Option<Box<dyn CombineStrategy>> {
        match self {
            FilterMode::SimpleAverage => Some(Box::new(SimpleAverage)),
            FilterMode::WeightedMovingAverage => Some(Box::new(WeightedMovingAverage)),
            FilterMode::None => Some(Box::new(Passthrough)),
            _ => None,
        }
    }

    pub fn is_implemented(self) -> bool {
        matches!(
            self,
            FilterMode::SimpleAverage | FilterMode::WeightedMovingAverage | FilterMode::None
        )
    }
}
