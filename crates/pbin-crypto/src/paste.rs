//! One paste, start to finish: content + expiration → request body + key

use pbin_core::{Expiration, PbinResult};
use tracing::debug;

use crate::adata::{AssociatedData, CipherParameters};
use crate::cipher::seal;
use crate::content::PasteContent;
use crate::kdf::{derive_key, MasterKey};
use crate::link::access_url;
use crate::payload::PasteRequest;
use crate::random::SecretSource;

/// Result of sealing: the body to POST and the key that opens it.
#[derive(Debug)]
pub struct SealedPaste {
    pub request: PasteRequest,
    pub master_key: MasterKey,
}

impl SealedPaste {
    /// Access URL for the locator the server returned.
    pub fn access_url(&self, server_base: &str, locator: &str) -> String {
        access_url(server_base, locator, &self.master_key)
    }
}

/// Encrypt `content` under a fresh master key and build the request body.
///
/// Draws, in order: master key (32 bytes), iv (12 bytes), salt (8 bytes).
/// Nothing is returned unless every stage succeeds.
pub fn seal_paste<S: SecretSource + ?Sized>(
    source: &S,
    content: &PasteContent,
    expiration: &Expiration,
) -> PbinResult<SealedPaste> {
    let master_key = MasterKey::generate(source)?;

    let plaintext = content.encode()?;
    debug!(
        plaintext_len = plaintext.len(),
        has_attachment = content.attachment().is_some(),
        "paste content encoded"
    );

    let params = CipherParameters::generate(source)?;
    let key = derive_key(&master_key, &params.salt, params.iterations);
    debug!(iterations = params.iterations, "paste key derived");

    let adata = AssociatedData::new(params);
    let canonical = adata.canonical()?;

    let ciphertext = seal(
        key.as_slice(),
        &adata.params().iv,
        &plaintext,
        canonical.as_bytes(),
    )?;
    debug!(
        ciphertext_len = ciphertext.len(),
        adata_len = canonical.as_bytes().len(),
        "paste sealed"
    );

    Ok(SealedPaste {
        request: PasteRequest::new(canonical, &ciphertext, expiration),
        master_key,
    })
}
