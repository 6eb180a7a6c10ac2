use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Inverse L2 regularization strength used for training. Large enough that the
/// fit is close to unregularized maximum likelihood.
pub const DEFAULT_INVERSE_REGULARIZATION: f64 = 100_000.0;
pub const DEFAULT_MAX_ITERATIONS: u64 = 100;
pub const DEFAULT_GRADIENT_TOLERANCE: f64 = 1e-4;

/// Central configuration for classifiers in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    pub kind: ClassifierKind,

    /// `C` in the usual logistic-regression parametrization; the solver penalty is `1 / C`.
    pub inverse_regularization: f64,

    pub max_iterations: u64,

    pub gradient_tolerance: f64,
}

/// Supported classifier implementations.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    #[default]
    Logistic,
    Mock,
}

impl FromStr for ClassifierKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logistic" => Ok(ClassifierKind::Logistic),
            "mock" => Ok(ClassifierKind::Mock),
            _ => Err(format!(
                "Unknown classifier kind: {}. Valid options are: logistic, mock",
                s
            )),
        }
    }
}

impl ClassifierConfig {
    pub fn new(kind: ClassifierKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// L2 penalty handed to the solver.
    pub fn alpha(&self) -> f64 {
        1.0 / self.inverse_regularization
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            kind: ClassifierKind::Logistic,
            inverse_regularization: DEFAULT_INVERSE_REGULARIZATION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            gradient_tolerance: DEFAULT_GRADIENT_TOLERANCE,
        }
    }
}

/// Load a [`ClassifierConfig`] from a JSON file. Missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ClassifierConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
