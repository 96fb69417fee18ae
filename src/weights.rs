//! Per-slot weights for the weighted moving average
//!
//! The first slot gets the configured highest weight. Every following slot
//! except the last gets half of the mass not yet allocated, and the last slot
//! takes whatever is left, so the table always sums to one.

/// Geometrically decaying weight table, indexed by history slot
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: Vec<f64>,
}

impl WeightTable {
    /// Build a table of `len` weights starting at `highest_weight`
    ///
    /// `len` must be at least 1. With a single slot the table is `[1.0]`.
    pub fn new(len: usize, highest_weight: f64) -> Self {
        let mut weights = Vec::with_capacity(len);
        let mut next = highest_weight;
        let mut allocated = 0.0;

        for i in 0..len {
            if i + 1 < len {
                weights.push(next);
                allocated += next;
                next = (1.0 - allocated) / 2.0;
            } else {
                weights.push(1.0 - allocated);
            }
        }

        WeightTable { weights }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all weights, one up to rounding
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}
