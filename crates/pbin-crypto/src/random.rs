//! Secure random byte sources
//!
//! Every master key, salt and nonce is drawn from a [`SecretSource`] passed in
//! by the caller. [`OsSecretSource`] reads the operating system CSPRNG;
//! [`FixedSecretSource`] produces a predictable byte stream for tests.

use std::sync::atomic::{AtomicU8, Ordering};

use pbin_core::{PbinError, PbinResult};
use rand::rngs::OsRng;
use rand::RngCore;

pub trait SecretSource: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill(&self, dest: &mut [u8]) -> PbinResult<()>;

    /// Return `n` fresh random bytes.
    fn generate(&self, n: usize) -> PbinResult<Vec<u8>> {
        let mut bytes = vec![0u8; n];
        self.fill(&mut bytes)?;
        Ok(bytes)
    }
}

/// Fill a fixed-size array from `source`.
pub fn generate_array<S, const N: usize>(source: &S) -> PbinResult<[u8; N]>
where
    S: SecretSource + ?Sized,
{
    let mut bytes = [0u8; N];
    source.fill(&mut bytes)?;
    Ok(bytes)
}

/// Operating-system CSPRNG (getrandom).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecretSource;

impl SecretSource for OsSecretSource {
    fn fill(&self, dest: &mut [u8]) -> PbinResult<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| PbinError::EntropyUnavailable(e.to_string()))
    }
}

/// Deterministic counter stream: `seed, seed+1, seed+2, ...` (wrapping),
/// continued across calls. Never use outside tests.
#[derive(Debug)]
pub struct FixedSecretSource {
    next: AtomicU8,
}

impl FixedSecretSource {
    pub fn new(seed: u8) -> Self {
        Self {
            next: AtomicU8::new(seed),
        }
    }
}

impl SecretSource for FixedSecretSource {
    fn fill(&self, dest: &mut [u8]) -> PbinResult<()> {
        for byte in dest.iter_mut() {
            *byte = self.next.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }
}
