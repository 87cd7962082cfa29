//! Shareable links built from the server's reply

use crate::kdf::MasterKey;

/// `server_base` (trailing `/` removed) + `locator` + `#` + base58(master key).
///
/// The fragment is never sent in HTTP requests, so the key stays client-side.
pub fn access_url(server_base: &str, locator: &str, master_key: &MasterKey) -> String {
    format!(
        "{}{}#{}",
        server_base.trim_end_matches('/'),
        locator,
        master_key.to_base58()
    )
}

/// Link that deletes the paste when opened.
pub fn delete_url(server_base: &str, paste_id: &str, delete_token: &str) -> String {
    format!(
        "{}/?pasteid={paste_id}&deletetoken={delete_token}",
        server_base.trim_end_matches('/')
    )
}
