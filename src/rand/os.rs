//! Operating system CSPRNG.

use super::{EntropyError, EntropySource};

/// Entropy straight from the OS via `getrandom`. Holds no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn next_u64(&mut self) -> Result<u64, EntropyError> {
        getrandom::u64().map_err(EntropyError::Os)
    }

    fn name(&self) -> &'static str {
        "getrandom"
    }
}
