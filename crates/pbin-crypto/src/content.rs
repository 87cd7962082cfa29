//! Paste plaintext: the JSON document that gets encrypted
//!
//! ```text
//! {"paste":"<text>"}
//! {"paste":"<text>","attachment":"<base64>","attachment_name":"<name>"}
//! ```

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pbin_core::{PbinError, PbinResult};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Name used when an attachment is given without one.
pub const DEFAULT_ATTACHMENT_NAME: &str = "attachment";

static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x1b\x{9b}][\[\]()#;?]*(?:(?:(?:[a-zA-Z\d]*(?:;[a-zA-Z\d]*)*)?\x07)|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PRZcf-ntqry=><~]))",
    )
    .expect("ANSI escape pattern is valid")
});

/// Remove terminal escape sequences (colors, cursor movement, OSC titles).
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Logical paste content. Field order is the serialized key order.
///
/// Fields are private so the text always passes through [`strip_ansi`],
/// whether built with [`PasteContent::text`] or deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteContent {
    #[serde(deserialize_with = "deserialize_stripped")]
    paste: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attachment_name: Option<String>,
}

fn deserialize_stripped<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|text| strip_ansi(&text))
}

impl PasteContent {
    /// Text-only paste. Escape sequences are stripped.
    pub fn text(text: &str) -> Self {
        Self {
            paste: strip_ansi(text),
            attachment: None,
            attachment_name: None,
        }
    }

    /// Attach raw bytes; a missing or empty name becomes `"attachment"`.
    ///
    /// Empty bytes leave the `attachment` key out, keeping only the name.
    pub fn with_attachment(mut self, bytes: &[u8], name: Option<&str>) -> Self {
        let name = name
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_ATTACHMENT_NAME);
        self.attachment = (!bytes.is_empty()).then(|| STANDARD.encode(bytes));
        self.attachment_name = Some(name.to_string());
        self
    }

    pub fn paste(&self) -> &str {
        &self.paste
    }

    /// Base64 attachment bytes, if any.
    pub fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    pub fn attachment_name(&self) -> Option<&str> {
        self.attachment_name.as_deref()
    }

    /// Compact JSON bytes, ready for encryption.
    pub fn encode(&self) -> PbinResult<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|e| PbinError::Serialization(format!("paste content: {e}")))
    }
}

/// One-shot form of [`PasteContent::text`] + [`PasteContent::with_attachment`] + [`PasteContent::encode`].
pub fn encode(
    text: &str,
    attachment: Option<&[u8]>,
    attachment_name: Option<&str>,
) -> PbinResult<Vec<u8>> {
    let mut content = PasteContent::text(text);
    if let Some(bytes) = attachment {
        content = content.with_attachment(bytes, attachment_name);
    }
    content.encode()
}
