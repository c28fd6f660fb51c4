//! End-to-end checks of the per-frame analysis pipeline.

use approx::assert_relative_eq;
use mien::analyzer::{FaceAnalyzer, FrameReading, Gender};
use mien::calib::EstimatorConfig;
use mien::classify::LabelScores;

fn frame(age: f32, expressions: &[(&str, f32)]) -> FrameReading {
    FrameReading {
        age,
        gender: Gender::Male,
        expressions: expressions.iter().copied().collect(),
    }
}

#[test]
fn worked_sequence_through_the_analyzer() {
    // capacity 3, alpha 0.25, reference 16, bounds [1, 100]
    let mut analyzer = FaceAnalyzer::new(
        EstimatorConfig::new(16.0)
            .window_capacity(3)
            .alpha(0.25)
            .bounds(1.0..=100.0),
    );

    let expressions = [("neutral", 0.2), ("happy", 0.8)];
    analyzer.analyze(frame(10.0, &expressions));
    analyzer.analyze(frame(12.0, &expressions));
    let third = analyzer.analyze(frame(14.0, &expressions));
    // window [10, 12, 14]: avg 12, error 4, bias 1.0, calibrated round(13.0)
    assert_eq!(third.age, Some(13));
    assert_eq!(third.emotion, ("happy".to_owned(), 0.8));
    assert_eq!(third.gender, Gender::Male);

    let fourth = analyzer.analyze(frame(20.0, &expressions));
    // window [12, 14, 20]: avg 15.33, bias 0.25 * 0.67 + 0.75 * 1.0, calibrated round(16.25)
    assert_eq!(fourth.age, Some(16));
}

#[test]
fn noisy_stream_settles_near_the_reference() {
    let reference = 24.0;
    let mut analyzer = FaceAnalyzer::new(EstimatorConfig::new(reference));

    fastrand::seed(7);
    let mut last = None;
    for _ in 0..400 {
        // Classifier reads ~6 years high with +-3 years of jitter.
        let raw = reference + 6.0 + (fastrand::f32() - 0.5) * 6.0;
        last = analyzer.analyze(frame(raw, &[])).age;
    }

    let settled = last.expect("calibrated age after 400 finite readings") as f32;
    assert_relative_eq!(settled, reference, epsilon = 2.0);
}

#[test]
fn dropouts_keep_the_previous_estimate() {
    let mut analyzer = FaceAnalyzer::new(EstimatorConfig::new(30.0).window_capacity(5));

    assert_eq!(analyzer.analyze(frame(f32::NAN, &[])).age, None);

    let stable = analyzer.analyze(frame(30.0, &[])).age;
    assert_eq!(stable, Some(30));
    for _ in 0..10 {
        assert_eq!(analyzer.analyze(frame(f32::INFINITY, &[])).age, stable);
    }
    assert_eq!(analyzer.age(), stable);
}

#[test]
fn empty_expressions_reduce_to_the_sentinel() {
    let mut analyzer = FaceAnalyzer::new(EstimatorConfig::new(30.0));
    let out = analyzer.analyze(frame(30.0, &[]));
    assert_eq!(out.emotion, (String::new(), 0.0));
}

#[test]
fn session_reset_starts_calibration_over() {
    let mut analyzer = FaceAnalyzer::new(EstimatorConfig::new(20.0).window_capacity(3));
    for _ in 0..20 {
        analyzer.analyze(frame(80.0, &[]));
    }
    analyzer.reset();
    assert_eq!(analyzer.age(), None);

    // A fresh session is uninfluenced by the previous one.
    assert_eq!(analyzer.analyze(frame(20.0, &[])).age, Some(20));
}

#[test]
fn scores_map_builds_from_pairs() {
    let scores: LabelScores = [("sad", 0.5), ("happy", 0.5)].into_iter().collect();
    // Insertion order decides exact ties.
    assert_eq!(scores.dominant(), ("sad", 0.5));
    assert_eq!(scores.len(), 2);
}
