use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Per-epoch training error, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorHistory {
    errors: VecDeque<f64>,
    history_size: Option<usize>,
    peak: f64,
}

impl ErrorHistory {
    /// Unbounded history
    pub fn new() -> Self {
        ErrorHistory {
            errors: VecDeque::new(),
            history_size: None,
            peak: 0.0,
        }
    }

    /// History that keeps only the newest `history_size` values
    pub fn bounded(history_size: usize) -> Self {
        ErrorHistory {
            errors: VecDeque::with_capacity(history_size),
            history_size: Some(history_size),
            peak: 0.0,
        }
    }

    /// Record one epoch's error. The peak tracks every recorded value, even
    /// ones a bounded history does not keep.
    pub fn record(&mut self, error: f64) {
        if error > self.peak {
            self.peak = error;
        }
        if let Some(limit) = self.history_size {
            if limit == 0 {
                return;
            }
            if self.errors.len() >= limit {
                self.errors.pop_front();
            }
        }
        self.errors.push_back(error);
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.errors.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.errors.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<f64> {
        self.errors.back().copied()
    }

    /// Smallest recorded error
    pub fn best(&self) -> Option<f64> {
        self.errors.iter().copied().reduce(f64::min)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Vertical scale for plotting: the largest error seen since the last
    /// clear, never below `1.0`.
    pub fn scale_max(&self) -> f64 {
        self.peak.max(1.0)
    }

    /// Get recent average error
    pub fn avg(&self, window: usize) -> Option<f64> {
        if self.errors.is_empty() || window == 0 {
            return None;
        }

        let n = window.min(self.errors.len());
        let sum: f64 = self.errors.iter().rev().take(n).sum();
        Some(sum / n as f64)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
        self.peak = 0.0;
    }
}
