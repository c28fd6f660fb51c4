//! Frame-driven wrapper around the calibrated estimator and the label reducer.
//!
//! One [`FaceAnalyzer`] is created per tracked face and fed exactly one [`FrameReading`] per
//! successfully detected frame, sequentially, from the frame-processing callback. All state lives
//! inside the analyzer, so independent faces get independent calibration.

use std::fmt;

use crate::calib::{CalibratedEstimator, EstimatorConfig};
use crate::classify::LabelScores;

/// Classifier gender output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Female => "female",
            Gender::Male => "male",
        })
    }
}

/// Raw per-frame output of the external face classifier.
#[derive(Debug, Clone)]
pub struct FrameReading {
    /// Raw age estimate for this frame. May be non-finite when the classifier glitches.
    pub age: f32,
    pub gender: Gender,
    /// Per-emotion confidence scores for this frame.
    pub expressions: LabelScores,
}

/// Stabilized per-frame analysis result, ready for the overlay layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceReading {
    /// Calibrated age estimate. `None` until the first finite raw reading has been observed;
    /// display a placeholder in that case.
    pub age: Option<i32>,
    pub gender: Gender,
    /// Dominant emotion label and its confidence. Empty label if no expressions were scored.
    pub emotion: (String, f32),
}

/// Per-face analysis state: calibrated age estimation plus per-frame emotion reduction.
pub struct FaceAnalyzer {
    age: CalibratedEstimator,
}

impl FaceAnalyzer {
    /// Creates an analyzer whose age estimator is built from `config`.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { age: config.build() }
    }

    /// Processes one frame's worth of classifier output.
    ///
    /// The age reading passes through the stateful calibrated estimator; the expression scores
    /// are reduced statelessly, with no memory of earlier frames.
    pub fn analyze(&mut self, frame: FrameReading) -> FaceReading {
        let age = self.age.observe(frame.age);
        let (label, score) = frame.expressions.dominant();
        FaceReading {
            age,
            gender: frame.gender,
            emotion: (label.to_owned(), score),
        }
    }

    /// Returns the most recent calibrated age without processing a frame.
    pub fn age(&self) -> Option<i32> {
        self.age.result()
    }

    /// Clears all accumulated calibration state when a tracking session ends.
    pub fn reset(&mut self) {
        log::debug!("face analyzer reset, discarding calibration state");
        self.age.reset();
    }
}

/// Which hand a set of hand landmarks belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Decodes the classifier's raw handedness score (`> 0.5` means right hand).
    pub fn from_score(raw: f32) -> Self {
        if raw > 0.5 {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }

    /// Returns the opposite hand.
    ///
    /// Selfie-view camera streams are horizontally mirrored, so the handedness reported for them
    /// has to be flipped before display.
    pub fn mirrored(self) -> Self {
        match self {
            Handedness::Left => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
        })
    }
}
