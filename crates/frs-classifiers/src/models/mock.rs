use crate::error::Result;
use crate::models::classifier_trait::NameClassifier;
use crate::prediction::{Embedding, NamePrediction};

/// Stand-in classifier for exercising call sites. Training fits nothing and
/// every prediction is the same constant, whatever the input or version tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockClassifier {
    emb_calc_version: String,
}

impl MockClassifier {
    pub const CURRENT_VERSION: &'static str = "LogisticClassifierMock_v0";
    pub const PREDICTED_NAME: &'static str = "MockPrediction";

    pub fn new() -> Self {
        Self::default()
    }

    fn prediction() -> NamePrediction {
        NamePrediction::new(Self::PREDICTED_NAME, 0.0)
    }
}

impl NameClassifier for MockClassifier {
    fn train<S: AsRef<str>>(
        _embeddings: &[Embedding],
        _names: &[S],
        emb_calc_version: &str,
    ) -> Result<Self> {
        Ok(Self {
            emb_calc_version: emb_calc_version.to_string(),
        })
    }

    fn predict(&self, _embedding: &Embedding, _emb_calc_version: &str) -> Result<NamePrediction> {
        Ok(Self::prediction())
    }

    fn rank(
        &self,
        _embedding: &Embedding,
        _emb_calc_version: &str,
        k: usize,
    ) -> Result<Vec<NamePrediction>> {
        Ok(std::iter::once(Self::prediction()).take(k).collect())
    }

    fn predict_batch(
        &self,
        embeddings: &[Embedding],
        _emb_calc_version: &str,
    ) -> Result<Vec<NamePrediction>> {
        Ok(vec![Self::prediction(); embeddings.len()])
    }

    fn emb_calc_version(&self) -> &str {
        &self.emb_calc_version
    }

    fn version(&self) -> &str {
        Self::CURRENT_VERSION
    }

    fn class_count(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "mock"
    }
}
