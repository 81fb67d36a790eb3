use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SwapStateResult<T> = error_stack::Result<T, Error>;

#[derive(Error, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Error {
    #[error("Address error: {0}")]
    AddressError(String),
}
