//! Optional /dev/urandom entropy source via a small buffered pool.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zeroize::Zeroize;

use super::{EntropyError, EntropySource};

const DEVICE: &str = "/dev/urandom";
const POOL_SIZE: usize = 4096;

pub fn is_available() -> bool {
    Path::new(DEVICE).exists()
}

/// Reads `/dev/urandom` in `POOL_SIZE` chunks. The pool is wiped on drop.
pub struct Urandom {
    file: File,
    pool: Box<[u8; POOL_SIZE]>,
    pos: usize,
}

impl Urandom {
    pub fn open() -> Result<Self, EntropyError> {
        let file = File::open(DEVICE).map_err(EntropyError::Urandom)?;
        Ok(Self {
            file,
            pool: Box::new([0u8; POOL_SIZE]),
            // Empty until the first draw.
            pos: POOL_SIZE,
        })
    }

    #[cold]
    fn refill(&mut self) -> Result<(), EntropyError> {
        self.file
            .read_exact(&mut self.pool[..])
            .map_err(EntropyError::Urandom)?;
        self.pos = 0;
        Ok(())
    }
}

impl EntropySource for Urandom {
    fn next_u64(&mut self) -> Result<u64, EntropyError> {
        if self.pos + 8 > POOL_SIZE {
            self.refill()?;
        }
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.pool[self.pos..self.pos + 8]);
        // Each word is handed out once.
        self.pool[self.pos..self.pos + 8].zeroize();
        self.pos += 8;
        Ok(u64::from_le_bytes(word))
    }

    fn name(&self) -> &'static str {
        DEVICE
    }
}

impl Drop for Urandom {
    fn drop(&mut self) {
        self.pool[..].zeroize();
    }
}
