//! EventClassifier: weight deltas into discrete game events.
//!
//! Load-cell noise wobbles every sample, so small deltas are ignored; a
//! physical block removal is a step change well clear of jitter. The
//! comparison baseline advances only when an event is emitted, so one
//! physical change is reported exactly once rather than once per sample
//! until the scale settles.

use crate::config::GameConfig;
use crate::types::{SensorEvent, WeightSample};

#[derive(Debug, Clone, Copy)]
pub struct EventClassifier {
    baseline: f64,
    weight_threshold: f64,
    collapse_threshold: f64,
}

impl EventClassifier {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            baseline: 0.0,
            weight_threshold: config.weight_threshold,
            collapse_threshold: config.collapse_threshold,
        }
    }

    /// Comparison baseline (last weight that produced an event, or the last
    /// rebase point).
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Reset the baseline to the current scale reading. Called when a round
    /// starts so the settled tower weight becomes the reference.
    pub fn rebase(&mut self, weight: f64) {
        self.baseline = weight;
    }

    /// Classify one sample against the baseline.
    ///
    /// A large positive jump (scale disturbed by falling blocks) is a
    /// collapse; that check runs before the removal check so a collapse is
    /// never miscounted as a removal. Any other delta beyond the removal
    /// threshold counts as a block removal, in either direction.
    pub fn classify(&mut self, sample: WeightSample) -> Option<SensorEvent> {
        let delta = sample.weight - self.baseline;

        let event = if delta > self.collapse_threshold {
            Some(SensorEvent::TowerCollapsed)
        } else if delta.abs() > self.weight_threshold {
            Some(SensorEvent::BlockRemoved)
        } else {
            None
        };

        if event.is_some() {
            self.baseline = sample.weight;
        }
        event
    }
}
