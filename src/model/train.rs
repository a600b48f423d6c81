use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::data::model::{CytologyDataset, Diagnosis};
use crate::model::classifier::{sigmoid, LogisticModel};
use crate::model::metrics::{ConfusionMatrix, EvaluationReport};
use crate::model::scaler::{ScaleError, StandardScaler};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Hyperparameters for the training run.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub epochs: usize,
    pub learning_rate: f64,
    /// L2 regularization strength.
    pub l2: f64,
    /// Fraction of rows held out for evaluation.
    pub test_fraction: f64,
    /// Seed for the shuffle and the weight init; 66 matches the original run.
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            epochs: 500,
            learning_rate: 0.1,
            l2: 1e-4,
            test_fraction: 0.2,
            seed: 66,
        }
    }
}

#[derive(Debug, Error)]
pub enum TrainError {
    #[error(transparent)]
    Scale(#[from] ScaleError),
    #[error("need at least {0} rows to hold out an evaluation split")]
    TooFewRows(usize),
    #[error("training split contains a single class; cannot fit a classifier")]
    SingleClass,
    #[error("gradient descent diverged (non-finite parameters at epoch {0})")]
    Diverged(usize),
}

/// Everything the trainer produces: the two artifacts plus the held-out
/// evaluation.
#[derive(Debug, Clone)]
pub struct TrainOutcome {
    pub scaler: StandardScaler,
    pub model: LogisticModel,
    pub report: EvaluationReport,
}

const MIN_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Fit the scaler and the classifier on a shuffled 80/20 split and evaluate
/// on the held-out rows. Any degenerate fit is a fatal error; there are no
/// retries.
pub fn train(dataset: &CytologyDataset, options: &TrainOptions) -> Result<TrainOutcome, TrainError> {
    let x_raw = dataset.feature_matrix();
    let y = dataset.labels();

    let scaler = StandardScaler::fit(&x_raw)?;
    let x = scaler.transform(&x_raw)?;

    let n = x.nrows();
    if n < MIN_ROWS {
        return Err(TrainError::TooFewRows(MIN_ROWS));
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut rng);

    let n_test = ((n as f64) * options.test_fraction).round() as usize;
    let n_test = n_test.clamp(1, n - 1);
    let (test_idx, train_idx) = indices.split_at(n_test);

    let x_train = x.select(Axis(0), train_idx);
    let y_train = y.select(Axis(0), train_idx);
    let x_test = x.select(Axis(0), test_idx);
    let y_test = y.select(Axis(0), test_idx);

    let positives = y_train.sum();
    if positives == 0.0 || positives == y_train.len() as f64 {
        return Err(TrainError::SingleClass);
    }

    log::info!(
        "fitting logistic regression on {} rows, evaluating on {}",
        x_train.nrows(),
        x_test.nrows()
    );
    let model = fit_logistic(&x_train, &y_train, options, &mut rng)?;

    let mut confusion = ConfusionMatrix::default();
    for (row, &truth) in x_test.rows().into_iter().zip(y_test.iter()) {
        let truth = if truth > 0.5 {
            Diagnosis::Malignant
        } else {
            Diagnosis::Benign
        };
        confusion.add(truth, model.predict(&row.to_vec()));
    }
    let report = EvaluationReport::from_confusion(confusion);
    log::info!("held-out accuracy {:.4}", report.accuracy);

    Ok(TrainOutcome {
        scaler,
        model,
        report,
    })
}

/// Full-batch gradient descent on the binary cross-entropy loss with L2.
fn fit_logistic(
    x: &Array2<f64>,
    y: &Array1<f64>,
    options: &TrainOptions,
    rng: &mut StdRng,
) -> Result<LogisticModel, TrainError> {
    let n = x.nrows() as f64;
    let mut weights: Array1<f64> = (0..x.ncols())
        .map(|_| (rng.gen::<f64>() - 0.5) * 0.01)
        .collect();
    let mut bias = 0.0;

    for epoch in 0..options.epochs {
        let p = (x.dot(&weights) + bias).mapv(sigmoid);
        let diff = &p - y;

        let mut grad_w = x.t().dot(&diff);
        grad_w.mapv_inplace(|g| g / n);
        grad_w.scaled_add(options.l2, &weights);
        let grad_b = diff.sum() / n;

        weights.scaled_add(-options.learning_rate, &grad_w);
        bias -= options.learning_rate * grad_b;

        if !bias.is_finite() || weights.iter().any(|w| !w.is_finite()) {
            return Err(TrainError::Diverged(epoch));
        }
    }

    Ok(LogisticModel { weights, bias })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::features::{feature_names, FEATURE_COUNT};
    use crate::data::model::Record;
    use crate::model::predict::Predictor;
    use approx::assert_abs_diff_eq;
    use rand_distr::{Distribution, Normal};

    /// Two well-separated Gaussian clusters over all 30 features.
    fn synthetic(n_benign: usize, n_malignant: usize, seed: u64) -> CytologyDataset {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0.0, 1.0).unwrap();
        let mut records = Vec::new();
        for _ in 0..n_benign {
            records.push(Record {
                diagnosis: Diagnosis::Benign,
                features: (0..FEATURE_COUNT)
                    .map(|j| j as f64 + noise.sample(&mut rng))
                    .collect(),
            });
        }
        for _ in 0..n_malignant {
            records.push(Record {
                diagnosis: Diagnosis::Malignant,
                features: (0..FEATURE_COUNT)
                    .map(|j| j as f64 + 3.0 + noise.sample(&mut rng))
                    .collect(),
            });
        }
        CytologyDataset::from_records(records)
    }

    #[test]
    fn held_out_accuracy_beats_the_majority_baseline() {
        let dataset = synthetic(120, 80, 7);
        let outcome = train(&dataset, &TrainOptions::default()).unwrap();
        // Majority class is 60% of the data; separable clusters should do
        // far better than that.
        assert!(outcome.report.accuracy > 0.9);
        assert_eq!(
            outcome.report.benign.support + outcome.report.malignant.support,
            40
        );
    }

    #[test]
    fn malignant_profiles_predict_malignant() {
        let dataset = synthetic(120, 80, 11);
        let outcome = train(&dataset, &TrainOptions::default()).unwrap();
        let predictor = Predictor {
            scaler: outcome.scaler,
            model: outcome.model,
        };

        let names = feature_names();
        let mut hits = 0;
        let malignant: Vec<&Record> = dataset
            .records
            .iter()
            .filter(|r| r.diagnosis == Diagnosis::Malignant)
            .collect();
        for record in &malignant {
            let input = names
                .iter()
                .cloned()
                .zip(record.features.iter().copied())
                .collect();
            let prediction = predictor.predict(&input).unwrap();
            assert_abs_diff_eq!(
                prediction.probabilities.benign + prediction.probabilities.malignant,
                1.0,
                epsilon = 1e-9
            );
            if prediction.diagnosis == Diagnosis::Malignant {
                hits += 1;
            }
        }
        let rate = hits as f64 / malignant.len() as f64;
        assert!(rate >= outcome.report.accuracy - 0.1, "rate {rate} too low");
    }

    #[test]
    fn single_class_is_fatal() {
        let dataset = synthetic(40, 0, 3);
        let err = train(&dataset, &TrainOptions::default()).unwrap_err();
        assert!(matches!(err, TrainError::SingleClass));
    }

    #[test]
    fn too_few_rows_is_fatal() {
        let dataset = synthetic(2, 1, 3);
        let err = train(&dataset, &TrainOptions::default()).unwrap_err();
        assert!(matches!(err, TrainError::TooFewRows(_)));
    }

    #[test]
    fn training_is_deterministic_for_a_seed() {
        let dataset = synthetic(60, 60, 5);
        let a = train(&dataset, &TrainOptions::default()).unwrap();
        let b = train(&dataset, &TrainOptions::default()).unwrap();
        assert_abs_diff_eq!(a.model.bias, b.model.bias, epsilon = 1e-15);
        assert_abs_diff_eq!(
            a.report.accuracy,
            b.report.accuracy,
            epsilon = 1e-15
        );
    }
}
