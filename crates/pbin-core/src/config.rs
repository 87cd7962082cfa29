use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::Expiration;
use crate::{PbinError, PbinResult};

/// Top-level client configuration (loaded from pbin.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PbinConfig {
    pub server: ServerConfig,
    pub paste: PasteConfig,
    pub log: LogConfig,
}

impl PbinConfig {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> PbinResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PbinError::Config(format!("parsing {}: {e}", path.display())))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Paste service address; scheme defaults to https (default: vim.cx)
    pub url: String,
    /// HTTP request timeout in seconds; 0 disables it (default: 30)
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Server base with trailing slashes removed and `https://` added when
    /// no scheme is given.
    pub fn normalized_url(&self) -> String {
        normalize_server_url(&self.url)
    }
}

/// Normalize a user-supplied server address into a base URL.
pub fn normalize_server_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteConfig {
    /// Expiration identifier sent with every paste (default: 1week)
    pub expire: Expiration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (default: warn)
    pub level: String,
    /// Log format: "json" or "text"
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: "vim.cx".into(),
            timeout_secs: 30,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "text".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[server]
url = "https://paste.example.com/"
timeout_secs = 10

[paste]
expire = "1day"

[log]
level = "debug"
format = "json"
"#;
        let config: PbinConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.server.url, "https://paste.example.com/");
        assert_eq!(config.server.normalized_url(), "https://paste.example.com");
        assert_eq!(config.server.timeout_secs, 10);
        assert_eq!(config.paste.expire.as_str(), "1day");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, "json");
    }

    #[test]
    fn test_parse_defaults() {
        let config: PbinConfig = toml::from_str("").unwrap();

        assert_eq!(config.server.url, "vim.cx");
        assert_eq!(config.server.normalized_url(), "https://vim.cx");
        assert_eq!(config.server.timeout_secs, 30);
        assert_eq!(config.paste.expire.as_str(), "1week");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, "text");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
[paste]
expire = "never"
"#;
        let config: PbinConfig = toml::from_str(toml_str).unwrap();

        // Overridden
        assert_eq!(config.paste.expire.as_str(), "never");
        // Defaults
        assert_eq!(config.server.url, "vim.cx");
        assert_eq!(config.log.format, "text");
    }

    #[test]
    fn test_reject_empty_expire() {
        let toml_str = r#"
[paste]
expire = ""
"#;
        assert!(toml::from_str::<PbinConfig>(toml_str).is_err());
    }

    #[test]
    fn test_normalize_server_url() {
        assert_eq!(normalize_server_url("vim.cx"), "https://vim.cx");
        assert_eq!(normalize_server_url("vim.cx/"), "https://vim.cx");
        assert_eq!(
            normalize_server_url("http://localhost:8080//"),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_server_url("https://example.org/bin/"),
            "https://example.org/bin"
        );
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PbinConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.url, "vim.cx");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nurl = \"paste.local\"").unwrap();
        let config = PbinConfig::load(file.path()).unwrap();
        assert_eq!(config.server.normalized_url(), "https://paste.local");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nurl = ").unwrap();
        let err = PbinConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PbinError::Config(_)));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = PbinConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: PbinConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.server.url, parsed.server.url);
        assert_eq!(config.paste.expire, parsed.paste.expire);
    }
}
