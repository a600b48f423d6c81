use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::data::model::Diagnosis;

// ---------------------------------------------------------------------------
// LogisticModel – linear weights + bias over standardized features
// ---------------------------------------------------------------------------

/// A fitted binary logistic-regression model.
///
/// Invariant: the weights were learned on scaler-transformed inputs, so every
/// input to [`LogisticModel::predict_proba`] must already be standardized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Array1<f64>,
    pub bias: f64,
}

/// Probability of each diagnostic class; sums to 1.
#[derive(Debug, Clone, Copy)]
pub struct ClassProbabilities {
    pub benign: f64,
    pub malignant: f64,
}

impl LogisticModel {
    /// Raw linear score `w·x + b` for one standardized input.
    pub fn decision_function(&self, scaled: &[f64]) -> f64 {
        debug_assert_eq!(scaled.len(), self.weights.len());
        self.weights
            .iter()
            .zip(scaled)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias
    }

    /// Per-class probabilities for one standardized input.
    pub fn predict_proba(&self, scaled: &[f64]) -> ClassProbabilities {
        let malignant = sigmoid(self.decision_function(scaled));
        ClassProbabilities {
            benign: 1.0 - malignant,
            malignant,
        }
    }

    /// Discrete class at the 0.5 decision boundary.
    pub fn predict(&self, scaled: &[f64]) -> Diagnosis {
        if self.predict_proba(scaled).malignant >= 0.5 {
            Diagnosis::Malignant
        } else {
            Diagnosis::Benign
        }
    }
}

pub(crate) fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn model() -> LogisticModel {
        LogisticModel {
            weights: array![2.0, -1.0],
            bias: 0.0,
        }
    }

    #[test]
    fn probabilities_sum_to_one() {
        let m = model();
        for input in [[0.0, 0.0], [3.5, -1.2], [-10.0, 4.0]] {
            let p = m.predict_proba(&input);
            assert_abs_diff_eq!(p.benign + p.malignant, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn zero_score_is_the_decision_boundary() {
        let m = model();
        let p = m.predict_proba(&[0.0, 0.0]);
        assert_abs_diff_eq!(p.malignant, 0.5, epsilon = 1e-12);
        // >= 0.5 resolves to malignant, matching the trainer's evaluation.
        assert_eq!(m.predict(&[0.0, 0.0]), Diagnosis::Malignant);
    }

    #[test]
    fn sign_of_the_score_picks_the_class() {
        let m = model();
        assert_eq!(m.predict(&[1.0, 0.0]), Diagnosis::Malignant);
        assert_eq!(m.predict(&[-1.0, 0.0]), Diagnosis::Benign);
        assert_eq!(m.predict(&[0.0, 1.0]), Diagnosis::Benign);
    }
}
