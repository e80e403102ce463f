use thiserror::Error;

use crate::rand::EntropyError;

#[derive(Debug, Error)]
pub enum Error {
    /// No explicit character set and every include toggle is off.
    #[error("config is empty")]
    EmptyConfiguration,

    #[error("random source failure: {0}")]
    RandomSourceFailure(#[from] EntropyError),
}
