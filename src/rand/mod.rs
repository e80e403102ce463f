//! Secure entropy sources and unbiased index selection.

mod os;
pub mod urand;

use thiserror::Error;

pub use os::OsEntropy;
pub use urand::{Urandom, is_available as is_urandom_available};

#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("OS entropy source failed: {0}")]
    Os(#[source] getrandom::Error),

    #[error("/dev/urandom: {0}")]
    Urandom(#[source] std::io::Error),
}

/// A cryptographically secure source of 64-bit words.
pub trait EntropySource {
    fn next_u64(&mut self) -> Result<u64, EntropyError>;

    /// Human-readable name for diagnostics.
    fn name(&self) -> &'static str;
}

// =============================================================================
// Sampling
// =============================================================================

/// Uniform index in `0..len` without modulo bias.
///
/// Draws that fall in the short tail above the largest multiple of `len` are
/// rejected and redrawn. `len` must be non-zero.
pub fn index<S: EntropySource + ?Sized>(source: &mut S, len: usize) -> Result<usize, EntropyError> {
    debug_assert!(len > 0);
    let len = len as u64;
    let zone = (u64::MAX / len) * len;

    loop {
        let draw = source.next_u64()?;
        if draw < zone {
            return Ok((draw % len) as usize);
        }
        log::trace!("rejected out-of-zone draw for range {len}");
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Scripted;
    use super::*;

    #[test]
    fn index_reduces_accepted_draws() {
        let mut source = Scripted::new(&[0, 7, 10]);
        assert_eq!(index(&mut source, 5).unwrap(), 0);
        assert_eq!(index(&mut source, 5).unwrap(), 2);
        assert_eq!(index(&mut source, 5).unwrap(), 0);
    }

    #[test]
    fn index_rejects_biased_tail() {
        // u64::MAX is divisible by 3, so the accept zone ends just below it.
        let mut source = Scripted::new(&[u64::MAX, 4]);
        assert_eq!(index(&mut source, 3).unwrap(), 1);
        assert!(source.0.is_empty());
    }

    #[test]
    fn index_propagates_failure() {
        let mut source = Scripted::new(&[]);
        assert!(matches!(
            index(&mut source, 10),
            Err(EntropyError::Urandom(_))
        ));
    }

    #[test]
    fn errors_keep_their_source() {
        use std::error::Error as _;

        let os = EntropyError::Os(getrandom::Error::UNSUPPORTED);
        assert!(os.source().is_some());

        let wrapped = crate::Error::from(os);
        assert!(wrapped.source().is_some_and(|e| e.source().is_some()));
    }

    #[test]
    fn index_stays_in_range_with_os_entropy() {
        let mut source = OsEntropy;
        for len in [1, 2, 3, 26, 61, 255] {
            for _ in 0..200 {
                assert!(index(&mut source, len).unwrap() < len);
            }
        }
    }
}
