pub mod config;
pub mod error;
pub mod types;

pub use error::{PbinError, PbinResult};
pub use types::Expiration;
