use crate::config::{ClassifierConfig, ClassifierKind};
use crate::error::Result;
use crate::models::classifier_trait::NameClassifier;
use crate::models::logistic::LogisticClassifier;
use crate::models::mock::MockClassifier;
use crate::prediction::Embedding;

/// Train a boxed classifier of the kind selected by `config`.
pub fn train_classifier<S: AsRef<str>>(
    config: &ClassifierConfig,
    embeddings: &[Embedding],
    names: &[S],
    emb_calc_version: &str,
) -> Result<Box<dyn NameClassifier>> {
    match config.kind {
        ClassifierKind::Logistic => Ok(Box::new(LogisticClassifier::train_with_config(
            config,
            embeddings,
            names,
            emb_calc_version,
        )?)),
        ClassifierKind::Mock => Ok(Box::new(MockClassifier::train(
            embeddings,
            names,
            emb_calc_version,
        )?)),
    }
}
