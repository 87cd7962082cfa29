//! pbin: encrypt stdin and share it through a PrivateBin-compatible server
//!
//!   echo hello | pbin                     - paste with default settings
//!   pbin -a trace.log -e 1day < note.txt  - paste with an attachment
//!   pbin --show-config                    - display current configuration

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncReadExt;

use pbin_client::PasteClient;
use pbin_core::config::{normalize_server_url, PbinConfig};
use pbin_core::Expiration;
use pbin_crypto::{OsSecretSource, PasteContent};

#[derive(Parser, Debug)]
#[command(
    name = "pbin",
    version,
    about = "Encrypted paste client",
    long_about = "pbin: encrypt stdin client-side and upload it to a PrivateBin server.\n\
                  The decryption key only ever appears in the fragment of the printed link."
)]
struct Cli {
    /// Path to pbin config file
    #[arg(long, short = 'c', env = "PBIN_CONFIG", default_value = "/etc/pbin/config.toml")]
    config: PathBuf,

    /// Paste server (overrides server.url; https:// is assumed without a scheme)
    #[arg(long, short = 'u', env = "PBIN_URL")]
    url: Option<String>,

    /// File to attach to the paste
    #[arg(long, short = 'a')]
    attach: Option<PathBuf>,

    /// Expiration: 5min, 10min, 1hour, 1day, 1week, 1month, 1year, never
    #[arg(long, short = 'e')]
    expire: Option<Expiration>,

    /// Also print the link that deletes the paste
    #[arg(long)]
    delete_link: bool,

    /// Print the active configuration and exit
    #[arg(long)]
    show_config: bool,

    /// Log level (overrides log.level)
    #[arg(long, env = "PBIN_LOG")]
    log: Option<String>,

    /// Log format (overrides log.format)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn from_config(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PbinConfig::load(&cli.config)
        .with_context(|| format!("loading config: {}", cli.config.display()))?;

    let level = cli.log.clone().unwrap_or_else(|| config.log.level.clone());
    let format = cli
        .log_format
        .unwrap_or_else(|| LogFormat::from_config(&config.log.format));
    init_logging(&level, format);

    if cli.show_config {
        return cmd_config_show(&config, &cli.config);
    }

    cmd_paste(&cli, &config).await
}

fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries only the links
    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

// ── `pbin` ────────────────────────────────────────────────────────────────────

async fn cmd_paste(cli: &Cli, config: &PbinConfig) -> Result<()> {
    let server = match &cli.url {
        Some(url) => normalize_server_url(url),
        None => config.server.normalized_url(),
    };
    let expire = cli
        .expire
        .clone()
        .unwrap_or_else(|| config.paste.expire.clone());

    let mut raw = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut raw)
        .await
        .context("reading paste from stdin")?;

    let mut content = PasteContent::text(&paste_text(&raw));
    if let Some(path) = &cli.attach {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading attachment: {}", path.display()))?;
        content = content.with_attachment(&bytes, attachment_name(path));
    }

    let client = PasteClient::new(&server, Duration::from_secs(config.server.timeout_secs))
        .with_context(|| format!("paste server: {server}"))?;
    let link = client
        .paste(&OsSecretSource, &content, &expire)
        .await
        .with_context(|| format!("uploading paste to {server}"))?;

    println!("{}", link.url);
    if cli.delete_link {
        println!("{}", link.delete_url);
    }
    Ok(())
}

/// Stdin as text, minus the single newline most shells and editors append.
fn paste_text(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    text.strip_suffix('\n').unwrap_or(&text).to_string()
}

fn attachment_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

// ── `pbin --show-config` ──────────────────────────────────────────────────────

fn cmd_config_show(config: &PbinConfig, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("# Configuration from: {}", config_path.display());
    } else {
        println!("# Configuration: defaults (no file at {})", config_path.display());
    }
    println!();
    let rendered = toml::to_string_pretty(config).context("serializing config to TOML")?;
    print!("{rendered}");
    Ok(())
}
