pub mod blend;
pub mod common;
pub mod config;
pub mod error;
pub mod filters;
pub mod history;
pub mod recorder;
pub mod smoothing;
pub mod weights;

pub use crate::config::FilterConfig;
pub use crate::error::{FilterError, Result};
pub use crate::filters::{CombineStrategy, FilterMode};
pub use crate::smoothing::{EntityKind, SmoothingFilter};

use crate::common::types::Point3D;
use log::info;
use std::collections::BTreeMap;

/// One smoothing filter per tracked joint, all sharing a configuration
#[derive(Debug)]
pub struct SkeletonSmoother {
    config: FilterConfig,
    filters: BTreeMap<String, SmoothingFilter>,
}

impl SkeletonSmoother {
    /// Create an empty smoother, validating `config` up front
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(SkeletonSmoother {
            config,
            filters: BTreeMap::new(),
        })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Start tracking a joint. Tracking an already tracked joint restarts its
    /// filter from empty history.
    pub fn track(&mut self, joint: &str) -> Result<()> {
        let filter = SmoothingFilter::new(self.config)?;
        if self.filters.insert(joint.to_string(), filter).is_some() {
            info!("restarted tracking of joint '{}'", joint);
        } else {
            info!("tracking joint '{}'", joint);
        }
        Ok(())
    }

    /// Stop tracking a joint and drop its filter
    pub fn untrack(&mut self, joint: &str) -> Option<SmoothingFilter> {
        let removed = self.filters.remove(joint);
        if removed.is_some() {
            info!("stopped tracking joint '{}'", joint);
        }
        removed
    }

    pub fn is_tracking(&self, joint: &str) -> bool {
        self.filters.contains_key(joint)
    }

    /// Smooth one raw sample for a tracked joint
    pub fn update_joint(&mut self, joint: &str, raw: Point3D, kind: EntityKind) -> Result<Point3D> {
        self.filters
            .get_mut(joint)
            .ok_or_else(|| FilterError::UnknownJoint(joint.to_string()))?
            .update_joint(raw, kind)
    }

    pub fn filter(&self, joint: &str) -> Option<&SmoothingFilter> {
        self.filters.get(joint)
    }

    /// Tracked joint names in sorted order
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    /// Reset every filter's history
    pub fn reset_all(&mut self) {
        for filter in self.filters.values_mut() {
            filter.reset();
        }
    }
}
