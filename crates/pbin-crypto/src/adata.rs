//! Associated data ("adata"): the authenticated, unencrypted parameter array
//!
//! ```text
//! [[iv_b64, salt_b64, iterations, key_bits, tag_bits, "aes", "gcm", "none"], "plaintext", 0, 0]
//! ```
//!
//! The array is serialized exactly once into a [`CanonicalAdata`]. Those bytes
//! are fed to AES-GCM as AAD and embedded verbatim in the request body, so the
//! receiver authenticates precisely what it parsed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pbin_core::{PbinError, PbinResult};
use serde::ser::{SerializeTuple, Serializer};
use serde::Serialize;
use serde_json::value::RawValue;

use crate::random::{generate_array, SecretSource};
use crate::{IV_SIZE, KDF_ITERATIONS, SALT_SIZE, TAG_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Aes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Gcm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    None,
}

/// How the receiver renders the decrypted paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Formatter {
    #[serde(rename = "plaintext")]
    PlainText,
}

/// Per-paste cipher parameters. Serializes as the 8-element inner array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherParameters {
    pub iv: [u8; IV_SIZE],
    pub salt: [u8; SALT_SIZE],
    pub iterations: u32,
    pub key_size: u32,
    pub tag_size: u32,
    pub algorithm: Algorithm,
    pub mode: Mode,
    pub compression: Compression,
}

impl CipherParameters {
    /// Fresh iv and salt from `source`, fixed constants for the rest.
    ///
    /// The iv is drawn before the salt.
    pub fn generate<S: SecretSource + ?Sized>(source: &S) -> PbinResult<Self> {
        let iv = generate_array(source)?;
        let salt = generate_array(source)?;
        Ok(Self::new(iv, salt))
    }

    pub fn new(iv: [u8; IV_SIZE], salt: [u8; SALT_SIZE]) -> Self {
        Self {
            iv,
            salt,
            iterations: KDF_ITERATIONS,
            key_size: 256,
            tag_size: (TAG_SIZE * 8) as u32,
            algorithm: Algorithm::Aes,
            mode: Mode::Gcm,
            compression: Compression::None,
        }
    }
}

impl Serialize for CipherParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(8)?;
        seq.serialize_element(&STANDARD.encode(self.iv))?;
        seq.serialize_element(&STANDARD.encode(self.salt))?;
        seq.serialize_element(&self.iterations)?;
        seq.serialize_element(&self.key_size)?;
        seq.serialize_element(&self.tag_size)?;
        seq.serialize_element(&self.algorithm)?;
        seq.serialize_element(&self.mode)?;
        seq.serialize_element(&self.compression)?;
        seq.end()
    }
}

/// The full adata array.
///
/// Discussion and burn-after-reading are not supported by this client and
/// always serialize as `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociatedData {
    params: CipherParameters,
    formatter: Formatter,
    open_discussion: bool,
    burn_after_reading: bool,
}

impl AssociatedData {
    pub fn new(params: CipherParameters) -> Self {
        Self {
            params,
            formatter: Formatter::PlainText,
            open_discussion: false,
            burn_after_reading: false,
        }
    }

    pub fn params(&self) -> &CipherParameters {
        &self.params
    }

    /// Serialize to the one canonical byte form used everywhere downstream.
    pub fn canonical(&self) -> PbinResult<CanonicalAdata> {
        serde_json::value::to_raw_value(self)
            .map(CanonicalAdata)
            .map_err(|e| PbinError::Serialization(format!("adata: {e}")))
    }
}

impl Serialize for AssociatedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_tuple(4)?;
        seq.serialize_element(&self.params)?;
        seq.serialize_element(&self.formatter)?;
        seq.serialize_element(&u8::from(self.open_discussion))?;
        seq.serialize_element(&u8::from(self.burn_after_reading))?;
        seq.end()
    }
}

/// Serialized adata. Only [`AssociatedData::canonical`] constructs it, and it
/// serializes back out byte-for-byte unchanged.
#[derive(Debug, Clone)]
pub struct CanonicalAdata(Box<RawValue>);

impl CanonicalAdata {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.get().as_bytes()
    }

    pub fn as_str(&self) -> &str {
        self.0.get()
    }
}

impl Serialize for CanonicalAdata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
