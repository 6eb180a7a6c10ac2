use crate::error::Result;
use crate::prediction::{Embedding, NamePrediction};

/// The contract shared by the real classifier and its test stand-in. Call
/// sites take either a generic `C: NameClassifier` or a `Box<dyn NameClassifier>`
/// so the implementation can be swapped without touching them.
///
/// A classifier is immutable once trained; every method takes `&self`, so a
/// single instance can serve predictions from many threads.
pub trait NameClassifier: Send + Sync {
    /// Fit a classifier. `embeddings[i]` is a labelled example of `names[i]`;
    /// `emb_calc_version` identifies the pipeline that produced the embeddings.
    fn train<S: AsRef<str>>(
        embeddings: &[Embedding],
        names: &[S],
        emb_calc_version: &str,
    ) -> Result<Self>
    where
        Self: Sized;

    /// Most probable name for `embedding`.
    fn predict(&self, embedding: &Embedding, emb_calc_version: &str) -> Result<NamePrediction>;

    /// Up to `k` predictions, most probable first.
    fn rank(
        &self,
        embedding: &Embedding,
        emb_calc_version: &str,
        k: usize,
    ) -> Result<Vec<NamePrediction>>;

    /// One prediction per embedding, in input order.
    fn predict_batch(
        &self,
        embeddings: &[Embedding],
        emb_calc_version: &str,
    ) -> Result<Vec<NamePrediction>> {
        embeddings
            .iter()
            .map(|embedding| self.predict(embedding, emb_calc_version))
            .collect()
    }

    /// Version of the embedding calculator the classifier was trained against.
    fn emb_calc_version(&self) -> &str;

    /// Format version of the classifier itself.
    fn version(&self) -> &str;

    /// Number of classes the classifier can emit.
    fn class_count(&self) -> usize;

    /// Optional human readable name for the classifier
    fn name(&self) -> &str {
        "classifier"
    }
}
