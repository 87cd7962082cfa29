use serde::{Deserialize, Serialize};

/// Server reply to a paste creation request.
///
/// On success `status` is 0 and the locator fields are set; otherwise the
/// server only sends `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteResponse {
    pub status: i32,
    #[serde(default)]
    pub id: String,
    /// Locator relative to the server base, e.g. `/?f468483c313401e8`
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub deletetoken: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// What the caller gets back for a stored paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteLink {
    pub id: String,
    /// Share link; the fragment carries the key
    pub url: String,
    /// Opening this deletes the paste
    pub delete_url: String,
}
