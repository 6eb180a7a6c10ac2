//! frs-classifiers: identity classifiers over face embeddings.
//!
//! A classifier is trained once from labelled embeddings and then answers
//! "whose face is this?" for new embeddings, returning a name together with
//! the model's probability for it. The real implementation wraps a multinomial
//! logistic regression from `linfa-logistic`; a mock with the same interface
//! lets call sites be tested without fitting anything.
//!
//! Every classifier remembers the embedding-calculator version it was trained
//! against and refuses to score embeddings produced by a different one.
pub mod config;
pub mod error;
pub mod models;
pub mod prediction;

pub use config::{ClassifierConfig, ClassifierKind};
pub use error::{ClassifierError, Result};
pub use models::classifier_trait::NameClassifier;
pub use models::logistic::LogisticClassifier;
pub use models::mock::MockClassifier;
pub use prediction::{Embedding, NamePrediction};
