//! pbin-client: HTTP transport for sealed pastes
//!
//! The request body is fully built (and the content encrypted) before any
//! connection is opened. The master key never appears in a request; it only
//! ends up in the fragment of the returned link.

pub mod client;
pub mod types;

pub use client::{PasteClient, JSON_API_HEADER, JSON_API_VALUE};
pub use types::{PasteLink, PasteResponse};
