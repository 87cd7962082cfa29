//! Request body for paste creation
//!
//! ```json
//! {"v":2,"adata":[...],"meta":{"expire":"1week"},"ct":"<base64>"}
//! ```

use pbin_core::{Expiration, PbinError, PbinResult};
use serde::{Deserialize, Serialize};

use crate::adata::CanonicalAdata;
use crate::cipher::Ciphertext;
use crate::FORMAT_VERSION;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteMeta {
    pub expire: String,
}

/// Fully built wire object. Field order is the serialized key order.
#[derive(Debug, Clone, Serialize)]
pub struct PasteRequest {
    pub v: u8,
    pub adata: CanonicalAdata,
    pub meta: PasteMeta,
    pub ct: String,
}

impl PasteRequest {
    pub fn new(adata: CanonicalAdata, ciphertext: &Ciphertext, expiration: &Expiration) -> Self {
        Self {
            v: FORMAT_VERSION,
            adata,
            meta: PasteMeta {
                expire: expiration.to_string(),
            },
            ct: ciphertext.to_base64(),
        }
    }

    /// Compact JSON body.
    pub fn to_json(&self) -> PbinResult<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| PbinError::Serialization(format!("paste request: {e}")))
    }
}
