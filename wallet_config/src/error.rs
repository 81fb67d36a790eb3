use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ConfigResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown feature flag: {0}")]
    UnknownFeatureFlag(String),

    #[error("Unknown experiment: {0}")]
    UnknownExperiment(String),

    #[error("Unknown experiment parameter: {0}")]
    UnknownExperimentParam(String),

    #[error("Unknown dynamic config: {0}")]
    UnknownDynamicConfig(String),
}
