//! Self-calibrating estimation of a noisy scalar signal.
//!
//! Per-frame classifier readings (age, in the original use case) jitter heavily between frames
//! and carry a systematic offset from the true value. [`CalibratedEstimator`] fixes both: a
//! [`MovingAvg`] window suppresses frame-to-frame noise, and a [`BiasCorrector`] steers the
//! averaged reading toward a known reference value supplied at construction.

use std::ops::RangeInclusive;

use crate::avg::{Averager, MovingAvg};

/// Default number of raw readings averaged per estimate.
pub const DEFAULT_WINDOW_CAPACITY: usize = 15;

/// Default smoothing constant for the bias correction.
pub const DEFAULT_ALPHA: f32 = 0.25;

/// Default range the calibrated output is clamped to.
pub const DEFAULT_BOUNDS: RangeInclusive<f32> = 1.0..=100.0;

/// Tracks the systematic offset between an averaged reading and a known reference value.
///
/// The held bias is updated once per sample by exponential smoothing of the estimation *error*
/// (`reference - current_mean`), not of the raw signal. Filtering the error instead of the signal
/// means single-frame outliers barely move the correction, while a persistent offset is learned
/// within a few dozen frames.
#[derive(Debug, Clone)]
pub struct BiasCorrector {
    alpha: f32,
    bias: f32,
}

impl BiasCorrector {
    /// Creates a bias corrector with smoothing constant `alpha`.
    ///
    /// # Panics
    ///
    /// Panics if `alpha` is not in the open interval `(0, 1)`.
    pub fn new(alpha: f32) -> Self {
        assert!(
            0.0 < alpha && alpha < 1.0,
            "bias smoothing constant must lie in (0, 1)"
        );
        Self { alpha, bias: 0.0 }
    }

    /// Folds the residual between `reference` and `current_mean` into the held bias and returns
    /// the updated bias.
    pub fn update(&mut self, current_mean: f32, reference: f32) -> f32 {
        let error = reference - current_mean;
        self.bias = (1.0 - self.alpha) * self.bias + self.alpha * error;
        self.bias
    }

    /// Returns the current bias without updating it.
    pub fn bias(&self) -> f32 {
        self.bias
    }

    fn reset(&mut self) {
        self.bias = 0.0;
    }
}

/// Configuration for a [`CalibratedEstimator`].
///
/// The reference value is deliberately required: it is a per-deployment calibration input, not
/// something the library can guess.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    reference: f32,
    window_capacity: usize,
    alpha: f32,
    bounds: RangeInclusive<f32>,
}

impl EstimatorConfig {
    /// Creates a configuration that calibrates toward `reference`, with all other options at
    /// their defaults.
    pub fn new(reference: f32) -> Self {
        Self {
            reference,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            alpha: DEFAULT_ALPHA,
            bounds: DEFAULT_BOUNDS,
        }
    }

    /// Sets the number of raw readings averaged per estimate.
    pub fn window_capacity(mut self, capacity: usize) -> Self {
        self.window_capacity = capacity;
        self
    }

    /// Sets the smoothing constant of the bias correction.
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the range the calibrated output is clamped to.
    pub fn bounds(mut self, bounds: RangeInclusive<f32>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Builds the estimator.
    ///
    /// # Panics
    ///
    /// Panics if the window capacity is 0, `alpha` is outside of `(0, 1)`, or the bounds range is
    /// empty.
    pub fn build(self) -> CalibratedEstimator {
        assert!(!self.bounds.is_empty(), "clamping bounds must be non-empty");
        CalibratedEstimator {
            window: MovingAvg::new(self.window_capacity),
            corrector: BiasCorrector::new(self.alpha),
            reference: self.reference,
            bounds: self.bounds,
            result: None,
        }
    }
}

/// Turns a stream of raw per-frame readings into a stable, bias-corrected integer estimate.
///
/// One estimator instance tracks one quantity for one session; it owns all of its state, so
/// multiple estimators (one per detected face, say) never interfere.
#[derive(Debug, Clone)]
pub struct CalibratedEstimator {
    window: MovingAvg,
    corrector: BiasCorrector,
    reference: f32,
    bounds: RangeInclusive<f32>,
    result: Option<i32>,
}

impl CalibratedEstimator {
    /// Feeds one raw reading into the estimator and returns the calibrated estimate.
    ///
    /// Non-finite readings are ignored without touching any state; the previous estimate is
    /// returned instead. `None` is returned until the first finite reading arrives — callers
    /// should display a placeholder.
    pub fn observe(&mut self, raw: f32) -> Option<i32> {
        if !raw.is_finite() {
            log::trace!("discarding non-finite reading {raw}");
            return self.result;
        }

        let avg = self.window.push(raw);
        let bias = self.corrector.update(avg, self.reference);
        let calibrated = (avg + bias).clamp(*self.bounds.start(), *self.bounds.end());
        self.result = Some(calibrated.round() as i32);
        self.result
    }

    /// Returns the most recent calibrated estimate, or `None` if no finite reading has been
    /// observed yet.
    pub fn result(&self) -> Option<i32> {
        self.result
    }

    /// Returns the current bias correction term.
    pub fn bias(&self) -> f32 {
        self.corrector.bias()
    }

    /// Discards all accumulated state, as if the estimator had just been built.
    pub fn reset(&mut self) {
        self.window.reset();
        self.corrector.reset();
        self.result = None;
    }
}
