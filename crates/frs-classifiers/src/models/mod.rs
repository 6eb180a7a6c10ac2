pub mod logistic;
pub mod mock;

pub mod classifier_trait;
pub mod factory;
