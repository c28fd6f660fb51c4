//! Demo binary that drives a [`FaceAnalyzer`] with a synthetic classifier stream.
//!
//! The real inputs (camera frames fed through face/hand model runtimes) are external to this
//! crate, so the demo stands in for them: it synthesizes noisy, systematically offset age
//! readings, per-frame emotion scores and raw handedness scores, and logs the stabilized values
//! the overlay layer would display.

use std::env;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use mien::analyzer::{FaceAnalyzer, FrameReading, Gender, Handedness};
use mien::avg::{Averager, Ema};
use mien::calib::EstimatorConfig;
use mien::classify::LabelScores;
use mien::timer::FpsCounter;

const EMOTIONS: [&str; 5] = ["neutral", "happy", "sad", "angry", "surprised"];

/// Frame cadence of a typical webcam stream.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> anyhow::Result<()> {
    mien::init_logger!();

    let reference = match env::args().nth(1) {
        Some(arg) => arg
            .parse::<f32>()
            .with_context(|| format!("invalid reference age `{arg}`"))?,
        None => 28.0,
    };

    let mut analyzer = FaceAnalyzer::new(EstimatorConfig::new(reference));
    // The EMA keeps the displayed emotion confidence from flickering; the label itself is
    // re-reduced from scratch every frame.
    let mut confidence = Ema::new(0.3);
    let mut fps = FpsCounter::new("analyzer");

    for frame in 0..150 {
        let raw = synthesize_age(reference, frame);
        let reading = FrameReading {
            age: raw,
            gender: Gender::Female,
            expressions: synthesize_expressions(),
        };

        let result = analyzer.analyze(reading);
        let (label, score) = result.emotion;
        let smoothed = confidence.push(score);

        let handedness = Handedness::from_score(fastrand::f32()).mirrored();

        match result.age {
            Some(age) => log::info!(
                "frame {frame}: age {age} (raw {raw:.1}), {} {label} {smoothed:.02}, {handedness} hand",
                result.gender,
            ),
            None => log::info!("frame {frame}: no finite reading yet"),
        }

        fps.tick();
        thread::sleep(FRAME_INTERVAL);
    }

    Ok(())
}

/// One raw age reading: the classifier reads a few years high, jitters, and occasionally drops
/// out entirely.
fn synthesize_age(reference: f32, frame: u32) -> f32 {
    if frame % 40 == 39 {
        return f32::NAN;
    }
    let systematic = 5.5;
    let jitter = (fastrand::f32() - 0.5) * 8.0;
    reference + systematic + jitter
}

fn synthesize_expressions() -> LabelScores {
    let mut scores = LabelScores::new();
    for label in EMOTIONS {
        scores.insert(label, fastrand::f32());
    }
    scores
}
