//! Evaluation metrics for the binary classifier.

use std::fmt;

use crate::data::model::Diagnosis;

// ---------------------------------------------------------------------------
// Confusion matrix (truth × predicted)
// ---------------------------------------------------------------------------

/// 2×2 confusion matrix; index 0 = benign, 1 = malignant.
#[derive(Debug, Clone, Default)]
pub struct ConfusionMatrix {
    counts: [[u32; 2]; 2],
}

impl ConfusionMatrix {
    pub fn add(&mut self, truth: Diagnosis, predicted: Diagnosis) {
        self.counts[truth.code()][predicted.code()] += 1;
    }

    pub fn get(&self, truth: Diagnosis, predicted: Diagnosis) -> u32 {
        self.counts[truth.code()][predicted.code()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().sum()
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct = self.counts[0][0] + self.counts[1][1];
        correct as f64 / total as f64
    }

    /// Precision/recall/F1 for one class treated as positive.
    pub fn class_report(&self, class: Diagnosis) -> ClassReport {
        let c = class.code();
        let tp = self.counts[c][c] as f64;
        let fp = self.counts[1 - c][c] as f64;
        let fn_ = self.counts[c][1 - c] as f64;
        let precision = if tp + fp == 0.0 { 0.0 } else { tp / (tp + fp) };
        let recall = if tp + fn_ == 0.0 { 0.0 } else { tp / (tp + fn_) };
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };
        ClassReport {
            precision,
            recall,
            f1,
            support: self.counts[c][0] + self.counts[c][1],
        }
    }
}

/// Precision/recall statistics for a single class.
#[derive(Debug, Clone, Copy)]
pub struct ClassReport {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: u32,
}

// ---------------------------------------------------------------------------
// EvaluationReport – what the trainer prints
// ---------------------------------------------------------------------------

/// Held-out evaluation summary: accuracy plus a per-class breakdown.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub accuracy: f64,
    pub benign: ClassReport,
    pub malignant: ClassReport,
    pub confusion: ConfusionMatrix,
}

impl EvaluationReport {
    pub fn from_confusion(confusion: ConfusionMatrix) -> Self {
        EvaluationReport {
            accuracy: confusion.accuracy(),
            benign: confusion.class_report(Diagnosis::Benign),
            malignant: confusion.class_report(Diagnosis::Malignant),
            confusion,
        }
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>10} {:>8} {:>9} {:>8}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        for (name, report) in [("Benign", &self.benign), ("Malignant", &self.malignant)] {
            writeln!(
                f,
                "{:>12} {:>10.2} {:>8.2} {:>9.2} {:>8}",
                name, report.precision, report.recall, report.f1, report.support
            )?;
        }
        writeln!(
            f,
            "{:>12} {:>10} {:>8} {:>9.2} {:>8}",
            "accuracy",
            "",
            "",
            self.accuracy,
            self.confusion.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn filled() -> ConfusionMatrix {
        // truth benign: 70 right, 2 wrong; truth malignant: 40 right, 3 wrong.
        let mut cm = ConfusionMatrix::default();
        for _ in 0..70 {
            cm.add(Diagnosis::Benign, Diagnosis::Benign);
        }
        for _ in 0..2 {
            cm.add(Diagnosis::Benign, Diagnosis::Malignant);
        }
        for _ in 0..40 {
            cm.add(Diagnosis::Malignant, Diagnosis::Malignant);
        }
        for _ in 0..3 {
            cm.add(Diagnosis::Malignant, Diagnosis::Benign);
        }
        cm
    }

    #[test]
    fn accuracy_counts_the_diagonal() {
        let cm = filled();
        assert_eq!(cm.total(), 115);
        assert_abs_diff_eq!(cm.accuracy(), 110.0 / 115.0, epsilon = 1e-12);
    }

    #[test]
    fn per_class_precision_and_recall() {
        let report = EvaluationReport::from_confusion(filled());
        assert_abs_diff_eq!(report.malignant.precision, 40.0 / 42.0, epsilon = 1e-12);
        assert_abs_diff_eq!(report.malignant.recall, 40.0 / 43.0, epsilon = 1e-12);
        assert_eq!(report.malignant.support, 43);
        assert_abs_diff_eq!(report.benign.recall, 70.0 / 72.0, epsilon = 1e-12);
        assert_eq!(report.benign.support, 72);
    }

    #[test]
    fn empty_matrix_reports_zero() {
        let cm = ConfusionMatrix::default();
        assert_abs_diff_eq!(cm.accuracy(), 0.0);
        let report = cm.class_report(Diagnosis::Benign);
        assert_abs_diff_eq!(report.precision, 0.0);
        assert_abs_diff_eq!(report.f1, 0.0);
    }
}
