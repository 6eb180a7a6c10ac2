use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// A face embedding as produced by the external embedding calculator.
pub type Embedding = Array1<f64>;

/// The name a classifier picked for an embedding and the probability it assigned to it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NamePrediction {
    pub name: String,
    pub probability: f64,
}

impl NamePrediction {
    pub fn new(name: impl Into<String>, probability: f64) -> Self {
        Self {
            name: name.into(),
            probability,
        }
    }
}
