//! Binary classification metrics for survival predictions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of positions where `predicted` and `actual` agree.
///
/// Compares over the shorter of the two slices; returns `0.0` when that is empty.
pub fn accuracy(predicted: &[bool], actual: &[bool]) -> f64 {
    let n = predicted.len().min(actual.len());
    if n == 0 {
        return 0.0;
    }
    let correct = predicted
        .iter()
        .zip(actual.iter())
        .filter(|(p, a)| p == a)
        .count();
    correct as f64 / n as f64
}

/// Confusion-matrix counts with `true` (survived) as the positive class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl ClassificationMetrics {
    pub fn from_predictions(predicted: &[bool], actual: &[bool]) -> Self {
        let mut m = Self::default();
        for (&p, &a) in predicted.iter().zip(actual.iter()) {
            match (p, a) {
                (true, true) => m.true_positives += 1,
                (false, false) => m.true_negatives += 1,
                (true, false) => m.false_positives += 1,
                (false, true) => m.false_negatives += 1,
            }
        }
        m
    }

    pub fn total(&self) -> usize {
        self.true_positives + self.true_negatives + self.false_positives + self.false_negatives
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positives + self.true_negatives, self.total())
    }

    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl fmt::Display for ClassificationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "accuracy={:.4} precision={:.4} recall={:.4} f1={:.4} (tp={} tn={} fp={} fn={})",
            self.accuracy(),
            self.precision(),
            self.recall(),
            self.f1(),
            self.true_positives,
            self.true_negatives,
            self.false_positives,
            self.false_negatives
        )
    }
}
