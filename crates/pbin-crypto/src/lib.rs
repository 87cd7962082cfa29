//! pbin-crypto: client-side encryption for PrivateBin-style pastes
//!
//! Nothing in this crate touches the network. It turns paste content into a
//! fully built request body plus the master key needed to read it back.
//!
//! Pipeline:
//! ```text
//! master key (32 random bytes)
//!   ├── PBKDF2-HMAC-SHA256(master, salt[8], 100000) -> AES-256 key
//!   ├── adata = [[iv, salt, 100000, 256, 128, "aes", "gcm", "none"], "plaintext", 0, 0]
//!   │     serialized once; the same bytes are the GCM AAD and the request's `adata`
//!   ├── ct = AES-256-GCM(key, iv[12], {"paste":...}, aad = adata) || tag[16]
//!   └── access URL fragment = base58(master)
//! ```

pub mod adata;
pub mod cipher;
pub mod content;
pub mod kdf;
pub mod link;
pub mod paste;
pub mod payload;
pub mod random;

pub use adata::{AssociatedData, CanonicalAdata, CipherParameters};
pub use cipher::{seal, Ciphertext};
pub use content::{strip_ansi, PasteContent};
pub use kdf::{derive_key, MasterKey};
pub use link::{access_url, delete_url};
pub use paste::{seal_paste, SealedPaste};
pub use payload::{PasteMeta, PasteRequest};
pub use random::{FixedSecretSource, OsSecretSource, SecretSource};

/// Size of the master key and the derived AES key in bytes (256-bit)
pub const KEY_SIZE: usize = 32;

/// Size of an AES-GCM nonce (96-bit)
pub const IV_SIZE: usize = 12;

/// Size of the PBKDF2 salt
pub const SALT_SIZE: usize = 8;

/// Size of a GCM authentication tag
pub const TAG_SIZE: usize = 16;

/// PBKDF2 iteration count expected by receiving clients
pub const KDF_ITERATIONS: u32 = 100_000;

/// Paste data format revision
pub const FORMAT_VERSION: u8 = 2;
