//! Per-frame label classification output and its reduction to a single dominant label.

use std::fmt;

use itertools::Itertools;

/// Confidence scores for a set of labels, produced fresh by a classifier for every frame.
///
/// Labels keep their insertion order, which makes the tie-break in [`dominant`][Self::dominant]
/// deterministic (a `HashMap` would not). Scores are expected to lie in `0.0..=1.0` per the usual
/// classifier convention, but this is not enforced.
#[derive(Debug, Clone, Default)]
pub struct LabelScores {
    entries: Vec<(String, f32)>,
}

impl LabelScores {
    /// Creates an empty score map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `label`/`score` pair, preserving insertion order.
    pub fn insert(&mut self, label: impl Into<String>, score: f32) {
        self.entries.push((label.into(), score));
    }

    /// Returns the number of labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(label, score)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.entries.iter().map(|(label, score)| (&**label, *score))
    }

    /// Reduces the map to its highest-scoring label.
    ///
    /// A label only takes the lead with a score *strictly* greater than the running maximum, so
    /// on an exact tie the earlier-inserted label wins. An empty map reduces to `("", 0.0)`.
    pub fn dominant(&self) -> (&str, f32) {
        self.iter()
            .fold(("", 0.0), |max, (label, score)| {
                if score > max.1 {
                    (label, score)
                } else {
                    max
                }
            })
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for LabelScores {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(label, score)| (label.into(), score))
                .collect(),
        }
    }
}

impl fmt::Display for LabelScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .format_with(", ", |(label, score), f| f(&format_args!(
                    "{label}: {score:.02}"
                )))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_picks_highest_score() {
        let scores: LabelScores = [("neutral", 0.1), ("happy", 0.7), ("sad", 0.2)]
            .into_iter()
            .collect();
        assert_eq!(scores.dominant(), ("happy", 0.7));
    }

    #[test]
    fn exact_tie_keeps_earlier_label() {
        let scores: LabelScores = [("a", 0.5), ("b", 0.5)].into_iter().collect();
        assert_eq!(scores.dominant(), ("a", 0.5));
    }

    #[test]
    fn empty_map_reduces_to_sentinel() {
        let scores = LabelScores::new();
        assert_eq!(scores.dominant(), ("", 0.0));
    }

    #[test]
    fn display_lists_scores_in_insertion_order() {
        let scores: LabelScores = [("happy", 0.75), ("sad", 0.1)].into_iter().collect();
        assert_eq!(scores.to_string(), "happy: 0.75, sad: 0.10");
    }

    #[test]
    fn zero_scores_do_not_beat_sentinel() {
        // The sentinel score is 0.0 and only strictly greater scores win.
        let scores: LabelScores = [("angry", 0.0)].into_iter().collect();
        assert_eq!(scores.dominant(), ("", 0.0));
    }
}
