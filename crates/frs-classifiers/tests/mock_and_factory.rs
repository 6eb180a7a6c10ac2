//! Integration tests for the mock classifier and config-driven construction.

use ndarray::array;

use frs_classifiers::models::factory;
use frs_classifiers::{
    ClassifierConfig, ClassifierKind, Embedding, MockClassifier, NameClassifier, NamePrediction,
};

/// A call site that only knows the trait, as a service layer would.
fn identify<C: NameClassifier>(classifier: &C, embedding: &Embedding, version: &str) -> String {
    classifier
        .predict(embedding, version)
        .map(|p| p.name)
        .unwrap_or_else(|e| format!("error: {}", e))
}

// ---------------------------------------------------------------------------
// MockClassifier
// ---------------------------------------------------------------------------

#[test]
fn mock_train_fits_nothing() {
    let embeddings = vec![array![1.0, 2.0], array![3.0, 4.0]];
    let mock = MockClassifier::train(&embeddings, &["alice", "bob"], "v1").unwrap();
    assert_eq!(mock.class_count(), 0);
    assert_eq!(mock.emb_calc_version(), "v1");
    assert_eq!(mock.name(), "mock");
}

#[test]
fn mock_train_ignores_length_mismatch() {
    let embeddings = vec![array![1.0], array![2.0], array![3.0]];
    assert!(MockClassifier::train(&embeddings, &["alice"], "v1").is_ok());
}

#[test]
fn mock_predict_is_constant() {
    let mock = MockClassifier::new();
    let expected = NamePrediction::new("MockPrediction", 0.0);

    assert_eq!(mock.predict(&array![0.0], "v1").unwrap(), expected);
    assert_eq!(mock.predict(&array![5.0, -1.0, 2.0], "anything").unwrap(), expected);
}

#[test]
fn mock_never_raises_version_mismatch() {
    let mock = MockClassifier::train(&[array![1.0]], &["alice"], "v1").unwrap();
    assert!(mock.predict(&array![1.0], "v2").is_ok());
    assert!(mock.rank(&array![1.0], "v2", 5).is_ok());
    assert!(mock.predict_batch(&[array![1.0]], "v2").is_ok());
}

#[test]
fn mock_rank_and_batch() {
    let mock = MockClassifier::new();
    let ranked = mock.rank(&array![1.0], "v1", 5).unwrap();
    assert_eq!(ranked, vec![NamePrediction::new("MockPrediction", 0.0)]);
    assert!(mock.rank(&array![1.0], "v1", 0).unwrap().is_empty());

    let batch = mock.predict_batch(&[array![1.0], array![2.0], array![3.0]], "v1").unwrap();
    assert_eq!(batch.len(), 3);
    assert!(batch.iter().all(|p| p.name == "MockPrediction" && p.probability == 0.0));
}

#[test]
fn mock_substitutes_at_generic_call_site() {
    let mock = MockClassifier::new();
    assert_eq!(identify(&mock, &array![0.3, 0.4], "v9"), "MockPrediction");
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

#[test]
fn factory_builds_mock() {
    let config = ClassifierConfig::new(ClassifierKind::Mock);
    let embeddings = vec![array![1.0, 0.0], array![0.0, 1.0]];
    let classifier = factory::train_classifier(&config, &embeddings, &["a", "b"], "v1").unwrap();

    assert_eq!(classifier.name(), "mock");
    assert_eq!(classifier.version(), MockClassifier::CURRENT_VERSION);
    let prediction = classifier.predict(&array![1.0, 0.0], "v2").unwrap();
    assert_eq!(prediction.name, "MockPrediction");
}

#[test]
fn factory_builds_and_predicts() {
    let config = ClassifierConfig::default();
    let embeddings = vec![
        array![5.0, 0.0],
        array![-5.0, 0.0],
    ];
    let classifier =
        factory::train_classifier(&config, &embeddings, &["alice", "bob"], "v1").unwrap();

    assert_eq!(classifier.name(), "logistic");
    assert_eq!(classifier.version(), "LogisticClassifier_v0");
    assert_eq!(classifier.class_count(), 2);

    let prediction = classifier.predict(&array![4.0, 0.5], "v1").unwrap();
    assert_eq!(prediction.name, "alice");
    assert!(classifier.predict(&array![4.0, 0.5], "v2").is_err());
}

#[test]
fn factory_propagates_training_errors() {
    let config = ClassifierConfig::default();
    let embeddings = vec![array![5.0, 0.0]];
    let result = factory::train_classifier(&config, &embeddings, &["alice", "bob"], "v1");
    assert!(result.is_err());
}
