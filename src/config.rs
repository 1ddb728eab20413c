//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BACKEND_URL` - Base URL of the backend API used by the contact page
//!   (default: `http://localhost:3000`, i.e. this same process)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CONTENT_PATH` - JSON file replacing the bundled content document (optional)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `BEHIND_PROXY` - Read client IPs from `X-Forwarded-For` / `X-Real-IP`
//!   for rate limiting (default: `false`)
//!
//! ```bash
//! export BACKEND_URL="https://api.mstatilitechnologies.com"
//! export LOG_FORMAT="json"
//! ```

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use url::Url;

use crate::api::middleware::rate_limit::RateLimitMode;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Base URL the contact page submits leads to.
    pub backend_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Overrides the content document compiled into the binary.
    pub content_path: Option<PathBuf>,
    pub static_dir: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            backend_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            content_path: None,
            static_dir: "static".to_string(),
            behind_proxy: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let backend_url = env::var("BACKEND_URL").unwrap_or(defaults.backend_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let content_path = env::var("CONTENT_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            backend_url,
            log_level,
            log_format,
            content_path,
            static_dir,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `backend_url` is not an absolute http(s) URL
    /// - `static_dir` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        match Url::parse(&self.backend_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(_) => anyhow::bail!(
                "BACKEND_URL must start with 'http://' or 'https://', got '{}'",
                self.backend_url
            ),
            Err(e) => anyhow::bail!("BACKEND_URL is not a valid URL ('{}'): {}", self.backend_url, e),
        }

        if self.static_dir.trim().is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Rate limiting mode for the served router.
    pub fn rate_limit_mode(&self) -> RateLimitMode {
        RateLimitMode::from_proxy_flag(self.behind_proxy)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Backend: {}", self.backend_url);

        match &self.content_path {
            Some(path) => tracing::info!("  Content: {}", path.display()),
            None => tracing::info!("  Content: bundled"),
        }

        tracing::info!("  Static files: {}", self.static_dir);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "BACKEND_URL",
        "LOG_FORMAT",
        "CONTENT_PATH",
        "STATIC_DIR",
        "BEHIND_PROXY",
    ];

    fn clear_env() {
        // SAFETY: callers are #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.backend_url = "ftp://backend".to_string();
        assert!(config.validate().is_err());

        config.backend_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.backend_url = "https://api.example.com".to_string();
        config.static_dir = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.backend_url, "http://localhost:3000");
        assert_eq!(config.static_dir, "static");
        assert!(config.content_path.is_none());
        assert!(!config.behind_proxy);
        assert_eq!(config.rate_limit_mode(), RateLimitMode::PeerIp);
    }

    #[test]
    #[serial]
    fn test_reads_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BACKEND_URL", "https://api.example.com");
            env::set_var("CONTENT_PATH", "/etc/site/content.json");
            env::set_var("BEHIND_PROXY", "1");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(
            config.content_path,
            Some(PathBuf::from("/etc/site/content.json"))
        );
        assert_eq!(config.rate_limit_mode(), RateLimitMode::BehindProxy);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_content_path_means_bundled() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CONTENT_PATH", "  ");
        }

        let config = Config::from_env().unwrap();
        assert!(config.content_path.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_backend_url_fails_load() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BACKEND_URL", "localhost:8000");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
