use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Instant;

use linfa::traits::Fit;
use linfa::Dataset;
use linfa_logistic::{MultiFittedLogisticRegression, MultiLogisticRegression};
use log::{debug, info, trace, warn};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::config::ClassifierConfig;
use crate::error::{ClassifierError, Result};
use crate::models::classifier_trait::NameClassifier;
use crate::prediction::{Embedding, NamePrediction};

/// Multinomial logistic regression over face embeddings.
///
/// Every training example becomes its own class: label `i` is assigned to
/// `embeddings[i]` and maps back to `names[i]`. Callers who want one class per
/// person must aggregate examples per identity before training.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    model: MultiFittedLogisticRegression<f64, usize>,
    class_to_name: HashMap<usize, String>,
    emb_calc_version: String,
    n_features: usize,
}

impl LogisticClassifier {
    pub const CURRENT_VERSION: &'static str = "LogisticClassifier_v0";

    /// Train with explicit solver settings. `config.kind` is ignored here; it
    /// only matters to [`crate::models::factory::train_classifier`].
    pub fn train_with_config<S: AsRef<str>>(
        config: &ClassifierConfig,
        embeddings: &[Embedding],
        names: &[S],
        emb_calc_version: &str,
    ) -> Result<Self> {
        if embeddings.len() != names.len() {
            return Err(ClassifierError::InvalidArgument(format!(
                "got {} embeddings but {} names",
                embeddings.len(),
                names.len()
            )));
        }
        if embeddings.is_empty() {
            return Err(ClassifierError::InvalidArgument(
                "at least one embedding is required for training".to_string(),
            ));
        }
        if !(config.inverse_regularization > 0.0) {
            return Err(ClassifierError::InvalidArgument(format!(
                "inverse_regularization must be positive, got {}",
                config.inverse_regularization
            )));
        }

        let records = stack_embeddings(embeddings)?;
        let n_features = records.ncols();
        let labels: Array1<usize> = (0..names.len()).collect();

        debug!(
            "Fitting multinomial logistic regression: alpha={}, max_iterations={}, gradient_tolerance={}",
            config.alpha(),
            config.max_iterations,
            config.gradient_tolerance
        );

        let started = Instant::now();
        let dataset = Dataset::new(records, labels);
        let model = MultiLogisticRegression::<f64>::default()
            .alpha(config.alpha())
            .max_iterations(config.max_iterations)
            .gradient_tolerance(config.gradient_tolerance)
            .fit(&dataset)
            .map_err(|e| ClassifierError::Solver(e.to_string()))?;

        let class_to_name: HashMap<usize, String> = names
            .iter()
            .enumerate()
            .map(|(label, name)| (label, name.as_ref().to_string()))
            .collect();

        info!(
            "Trained {} on {} examples ({} classes, {} features) in {:.2?}",
            Self::CURRENT_VERSION,
            embeddings.len(),
            class_to_name.len(),
            n_features,
            started.elapsed()
        );

        Ok(Self {
            model,
            class_to_name,
            emb_calc_version: emb_calc_version.to_string(),
            n_features,
        })
    }

    pub fn class_to_name(&self) -> &HashMap<usize, String> {
        &self.class_to_name
    }

    /// Dimensionality of the embeddings the model was trained on.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    fn check_version(&self, emb_calc_version: &str) -> Result<()> {
        if self.emb_calc_version != emb_calc_version {
            warn!(
                "Rejecting embedding from calculator '{}'; classifier was trained with '{}'",
                emb_calc_version, self.emb_calc_version
            );
            return Err(ClassifierError::VersionMismatch {
                expected: self.emb_calc_version.clone(),
                found: emb_calc_version.to_string(),
            });
        }
        Ok(())
    }

    /// Query must match the training dimensionality and hold only finite values.
    fn check_embedding(&self, embedding: &Embedding) -> Result<()> {
        if embedding.len() != self.n_features {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.n_features,
                found: embedding.len(),
            });
        }
        if !embedding.iter().all(|v| v.is_finite()) {
            return Err(ClassifierError::InvalidArgument(
                "embedding contains NaN or infinite values".to_string(),
            ));
        }
        Ok(())
    }

    /// Class probabilities for each row of `x`, one column per entry of `model.classes()`.
    fn probabilities(&self, x: &ArrayView2<f64>) -> Array2<f64> {
        self.model.predict_probabilities(x)
    }

    /// (label, probability) pairs sorted by descending probability. The sort is
    /// stable and columns follow ascending label order, so exact ties resolve
    /// to the lowest label.
    fn ranked_labels(&self, row: ArrayView1<f64>) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .model
            .classes()
            .iter()
            .copied()
            .zip(row.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked
    }

    fn to_prediction(&self, label: usize, probability: f64) -> Result<NamePrediction> {
        let name = self.class_to_name.get(&label).ok_or_else(|| {
            ClassifierError::Solver(format!("model emitted unknown class {}", label))
        })?;
        Ok(NamePrediction::new(name.clone(), probability))
    }
}

impl NameClassifier for LogisticClassifier {
    fn train<S: AsRef<str>>(
        embeddings: &[Embedding],
        names: &[S],
        emb_calc_version: &str,
    ) -> Result<Self> {
        Self::train_with_config(
            &ClassifierConfig::default(),
            embeddings,
            names,
            emb_calc_version,
        )
    }

    fn predict(&self, embedding: &Embedding, emb_calc_version: &str) -> Result<NamePrediction> {
        self.rank(embedding, emb_calc_version, 1)?
            .into_iter()
            .next()
            .ok_or_else(|| ClassifierError::Solver("model produced no class probabilities".to_string()))
    }

    fn rank(
        &self,
        embedding: &Embedding,
        emb_calc_version: &str,
        k: usize,
    ) -> Result<Vec<NamePrediction>> {
        self.check_version(emb_calc_version)?;
        self.check_embedding(embedding)?;

        let query = embedding.view().insert_axis(Axis(0));
        let probabilities = self.probabilities(&query);
        let ranked = self.ranked_labels(probabilities.row(0));
        trace!("Top class probabilities: {:?}", &ranked[..ranked.len().min(5)]);

        ranked
            .into_iter()
            .take(k)
            .map(|(label, probability)| self.to_prediction(label, probability))
            .collect()
    }

    fn predict_batch(
        &self,
        embeddings: &[Embedding],
        emb_calc_version: &str,
    ) -> Result<Vec<NamePrediction>> {
        self.check_version(emb_calc_version)?;
        if embeddings.is_empty() {
            return Ok(Vec::new());
        }
        for embedding in embeddings {
            self.check_embedding(embedding)?;
        }

        let records = stack_embeddings(embeddings)?;
        let probabilities = self.probabilities(&records.view());

        probabilities
            .axis_iter(Axis(0))
            .map(|row| {
                let (label, probability) = self
                    .ranked_labels(row)
                    .into_iter()
                    .next()
                    .ok_or_else(|| {
                        ClassifierError::Solver("model produced no class probabilities".to_string())
                    })?;
                self.to_prediction(label, probability)
            })
            .collect()
    }

    fn emb_calc_version(&self) -> &str {
        &self.emb_calc_version
    }

    fn version(&self) -> &str {
        Self::CURRENT_VERSION
    }

    fn class_count(&self) -> usize {
        self.class_to_name.len()
    }

    fn name(&self) -> &str {
        "logistic"
    }
}

/// Stack embeddings row-wise into an (n_samples, n_features) matrix.
fn stack_embeddings(embeddings: &[Embedding]) -> Result<Array2<f64>> {
    let n_features = embeddings.first().map(|e| e.len()).unwrap_or(0);
    let mut data = Vec::with_capacity(embeddings.len() * n_features);
    for (i, embedding) in embeddings.iter().enumerate() {
        if embedding.len() != n_features {
            return Err(ClassifierError::InvalidArgument(format!(
                "embedding {} has {} dimensions, expected {}",
                i,
                embedding.len(),
                n_features
            )));
        }
        data.extend(embedding.iter().copied());
    }
    Array2::from_shape_vec((embeddings.len(), n_features), data)
        .map_err(|e| ClassifierError::InvalidArgument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_stack_embeddings_rejects_ragged_rows() {
        let embeddings = vec![array![0.0, 1.0], array![0.0, 1.0, 2.0]];
        let err = stack_embeddings(&embeddings).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidArgument(_)));
    }

    #[test]
    fn test_stack_embeddings_row_major() {
        let embeddings = vec![array![1.0, 2.0], array![3.0, 4.0], array![5.0, 6.0]];
        let records = stack_embeddings(&embeddings).unwrap();
        assert_eq!(records.dim(), (3, 2));
        assert_eq!(records.row(1).to_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_logistic_classifier_two_identities() {
        let embeddings = vec![array![-3.0, -3.0], array![3.0, 3.0]];
        let names = ["alice", "bob"];

        let classifier = LogisticClassifier::train(&embeddings, &names, "v1").unwrap();

        assert_eq!(classifier.n_features(), 2);
        assert_eq!(classifier.class_count(), 2);
        assert_eq!(classifier.version(), "LogisticClassifier_v0");

        let prediction = classifier.predict(&array![-2.5, -3.2], "v1").unwrap();
        assert_eq!(prediction.name, "alice");
        assert!(prediction.probability > 0.5);

        let prediction = classifier.predict(&array![2.8, 3.1], "v1").unwrap();
        assert_eq!(prediction.name, "bob");
    }

    #[test]
    fn test_rank_is_sorted_and_covers_all_classes() {
        let embeddings = vec![array![-3.0, 0.0], array![3.0, 0.0], array![0.0, 3.0]];
        let names = ["alice", "bob", "carol"];
        let classifier = LogisticClassifier::train(&embeddings, &names, "v1").unwrap();

        let ranked = classifier.rank(&array![2.5, 0.2], "v1", 10).unwrap();
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].name, "bob");
        for pair in ranked.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
        let total: f64 = ranked.iter().map(|p| p.probability).sum();
        assert!((total - 1.0).abs() < 1e-6);

        assert!(classifier.rank(&array![2.5, 0.2], "v1", 0).unwrap().is_empty());
    }
}
