//! Per-joint smoothing filter
//!
//! Each filter keeps two circular histories, one for absolute joint positions
//! and one for positions relative to a reference joint. An update writes the
//! raw sample into the cursor slot, combines the whole buffer, then stores the
//! combined output back into that same slot before advancing. The history
//! therefore holds filtered outputs, not raw input, and the filter behaves
//! recursively: every output feeds into the next `history_length` updates.
//!
//! A filter is driven by one tracking stream. Updates take `&mut self`, so
//! callers that share a filter across threads must synchronize externally.

use crate::blend;
use crate::common::types::{is_finite3, Point2D, Point3D};
use crate::config::{FilterConfig, LATENCY_WARNING_THRESHOLD};
use crate::error::{FilterError, Result};
use crate::filters::{CombineStrategy, FilterMode};
use crate::history::HistoryBuffer;
use crate::recorder::SampleRecorder;
use crate::weights::WeightTable;
use log::{debug, warn};

/// Selects which history an update goes to
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Absolute joint position
    Joint,
    /// Position relative to a reference joint such as a shoulder or elbow
    RelativeJoint,
}

/// Temporal smoothing filter for one tracked joint
#[derive(Debug)]
pub struct SmoothingFilter {
    config: FilterConfig,
    weights: WeightTable,
    joint_history: HistoryBuffer,
    relative_joint_history: HistoryBuffer,
    strategy: Option<Box<dyn CombineStrategy>>,
    recorder: Option<SampleRecorder>,
}

impl SmoothingFilter {
    /// Create a filter using the strategy for `config.mode`
    ///
    /// Modes without a combination rule are accepted here; the first update
    /// reports `FilterError::NotImplemented`.
    pub fn new(config: FilterConfig) -> Result<Self> {
        if !config.mode.is_implemented() {
            warn!(
                "filter mode {:?} has no combination rule, updates will fail",
                config.mode
            );
        }
        Self::build(config, config.mode.strategy())
    }

    /// Create a filter with a caller-supplied combination strategy
    pub fn with_strategy(config: FilterConfig, strategy: Box<dyn CombineStrategy>) -> Result<Self> {
        Self::build(config, Some(strategy))
    }

    fn build(config: FilterConfig, strategy: Option<Box<dyn CombineStrategy>>) -> Result<Self> {
        config.validate()?;

        if config.history_length > LATENCY_WARNING_THRESHOLD {
            warn!(
                "history length {} exceeds {}, expect noticeable latency",
                config.history_length, LATENCY_WARNING_THRESHOLD
            );
        }

        let recorder = if config.record_samples > 0 {
            Some(SampleRecorder::new(config.record_samples))
        } else {
            None
        };

        debug!(
            "created smoothing filter: mode={:?} history_length={} highest_weight={}",
            config.mode, config.history_length, config.highest_weight
        );

        Ok(SmoothingFilter {
            weights: WeightTable::new(config.history_length, config.highest_weight),
            joint_history: HistoryBuffer::new(config.history_length),
            relative_joint_history: HistoryBuffer::new(config.history_length),
            strategy,
            recorder,
            config,
        })
    }

    /// Filter one raw sample and return the smoothed position
    ///
    /// Fails without touching any history when the mode has no strategy, or
    /// when `reject_non_finite` is set and the sample is NaN or infinite.
    pub fn update_joint(&mut self, raw: Point3D, kind: EntityKind) -> Result<Point3D> {
        let strategy = match self.strategy.as_deref() {
            Some(strategy) => strategy,
            None => return Err(FilterError::NotImplemented(self.config.mode)),
        };

        if self.config.reject_non_finite && !is_finite3(&raw) {
            return Err(FilterError::InvalidSample);
        }

        let history = match kind {
            EntityKind::Joint => &mut self.joint_history,
            EntityKind::RelativeJoint => &mut self.relative_joint_history,
        };

        history.write(raw);
        let filtered = strategy.combine(history, &self.weights);
        history.write(filtered);
        history.advance();

        if let Some(recorder) = self.recorder.as_mut() {
            recorder.record(kind, raw, filtered);
        }

        Ok(filtered)
    }

    /// Blend two 2D vectors, see [`blend::blend`]
    pub fn blend_vectors(previous: Point2D, current: Point2D, factor: f64) -> Point2D {
        blend::blend(previous, current, factor)
    }

    /// Zero both histories and rewind their cursors
    pub fn reset(&mut self) {
        self.joint_history.clear();
        self.relative_joint_history.clear();
        if let Some(recorder) = self.recorder.as_mut() {
            recorder.clear();
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Mode the filter was configured with
    pub fn mode(&self) -> FilterMode {
        self.config.mode
    }

    pub fn history_length(&self) -> usize {
        self.config.history_length
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn history(&self, kind: EntityKind) -> &HistoryBuffer {
        match kind {
            EntityKind::Joint => &self.joint_history,
            EntityKind::RelativeJoint => &self.relative_joint_history,
        }
    }

    /// Name of the active strategy, `None` for unimplemented modes
    pub fn strategy_name(&self) -> Option<&str> {
        self.strategy.as_deref().map(|s| s.name())
    }

    pub fn recorder(&self) -> Option<&SampleRecorder> {
        self.recorder.as_ref()
    }
}
