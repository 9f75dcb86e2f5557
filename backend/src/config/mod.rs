//! Configuration module for the gallery backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Default request body limit for uploads (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON document holding the image collection
    pub data_file: PathBuf,
    /// Directory uploaded image files are written to
    pub upload_dir: PathBuf,
    /// Directory holding the frontend bundle
    pub static_dir: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Maximum accepted upload request size in bytes
    pub max_upload_bytes: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format ("pretty" or "json")
    pub log_format: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let data_file = env::var("GALLERY_DATA_FILE")
            .unwrap_or_else(|_| "./data/data.json".to_string())
            .into();

        let upload_dir = env::var("GALLERY_UPLOAD_DIR")
            .unwrap_or_else(|_| "./uploads".to_string())
            .into();

        let static_dir = env::var("GALLERY_STATIC_DIR")
            .unwrap_or_else(|_| "./frontend".to_string())
            .into();

        let bind_addr = env::var("GALLERY_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()?;

        let max_upload_bytes = env::var("GALLERY_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        let log_level = env::var("GALLERY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("GALLERY_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

        Ok(Self {
            data_file,
            upload_dir,
            static_dir,
            bind_addr,
            max_upload_bytes,
            log_level,
            log_format,
        })
    }

    /// Whether logs should be emitted as JSON lines.
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
