//! Key derivation: PBKDF2-HMAC-SHA256(master key, salt) → AES-256 key

use pbin_core::PbinResult;
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use crate::random::{generate_array, SecretSource};
use crate::{KEY_SIZE, SALT_SIZE};

/// A 256-bit random master key, one per paste.
///
/// Never leaves the process except as the base58 URL fragment.
/// Zeroized on drop to prevent secrets lingering in memory.
#[derive(Clone)]
pub struct MasterKey {
    bytes: [u8; KEY_SIZE],
}

impl MasterKey {
    /// Draw a fresh master key from `source`.
    pub fn generate<S: SecretSource + ?Sized>(source: &S) -> PbinResult<Self> {
        Ok(Self::from_bytes(generate_array(source)?))
    }

    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// Base58 (Bitcoin alphabet) form used as the URL fragment.
    pub fn to_base58(&self) -> String {
        bs58::encode(&self.bytes).into_string()
    }
}

impl Drop for MasterKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive the AES-256 key for one paste.
///
/// `iterations` is carried in the associated data, so receivers rerun the
/// exact same derivation.
pub fn derive_key(
    master: &MasterKey,
    salt: &[u8; SALT_SIZE],
    iterations: u32,
) -> Zeroizing<[u8; KEY_SIZE]> {
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    pbkdf2::pbkdf2_hmac::<Sha256>(master.as_bytes(), salt, iterations, key.as_mut_slice());
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSecretSource;
    use crate::KDF_ITERATIONS;

    #[test]
    fn test_kdf_deterministic() {
        let master = MasterKey::from_bytes([42u8; KEY_SIZE]);
        let salt = [1u8; SALT_SIZE];

        let key1 = derive_key(&master, &salt, KDF_ITERATIONS);
        let key2 = derive_key(&master, &salt, KDF_ITERATIONS);

        assert_eq!(*key1, *key2, "KDF must be deterministic");
        assert_eq!(key1.len(), 32);
    }

    #[test]
    fn test_kdf_different_salts() {
        let master = MasterKey::from_bytes([42u8; KEY_SIZE]);

        let key1 = derive_key(&master, &[1u8; SALT_SIZE], 1000);
        let key2 = derive_key(&master, &[2u8; SALT_SIZE], 1000);

        assert_ne!(*key1, *key2, "different salts must produce different keys");
    }

    #[test]
    fn test_kdf_different_masters() {
        let salt = [9u8; SALT_SIZE];

        let key1 = derive_key(&MasterKey::from_bytes([1u8; KEY_SIZE]), &salt, 1000);
        let key2 = derive_key(&MasterKey::from_bytes([2u8; KEY_SIZE]), &salt, 1000);

        assert_ne!(*key1, *key2);
    }

    #[test]
    fn test_kdf_iterations_matter() {
        let master = MasterKey::from_bytes([3u8; KEY_SIZE]);
        let salt = [4u8; SALT_SIZE];

        assert_ne!(*derive_key(&master, &salt, 1), *derive_key(&master, &salt, 2));
    }

    #[test]
    fn test_kdf_rfc7914_vector() {
        // RFC 7914 §11: P="passwd", S="salt", c=1
        let mut out = [0u8; 32];
        pbkdf2::pbkdf2_hmac::<Sha256>(b"passwd", b"salt", 1, &mut out);
        assert_eq!(
            out[..8],
            [0x55, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f]
        );
    }

    #[test]
    fn test_generate_from_source() {
        let master = MasterKey::generate(&FixedSecretSource::new(0)).unwrap();
        let expected: Vec<u8> = (0u8..32).collect();
        assert_eq!(master.as_bytes().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_base58_fragment() {
        assert_eq!(MasterKey::from_bytes([0u8; KEY_SIZE]).to_base58(), "1".repeat(32));

        let master = MasterKey::from_bytes([0xFFu8; KEY_SIZE]);
        let decoded = bs58::decode(master.to_base58()).into_vec().unwrap();
        assert_eq!(decoded.as_slice(), master.as_bytes());
    }

    #[test]
    fn test_debug_redacted() {
        let master = MasterKey::from_bytes([0xABu8; KEY_SIZE]);
        let rendered = format!("{master:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("171"));
    }
}
