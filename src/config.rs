//! Configuration management for the edge filter service.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `EDGE_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Environment Variables
//!
//! - `EDGE_HOST` - Server bind address (default: 127.0.0.1)
//! - `EDGE_PORT` - Server port (default: 5000)
//! - `EDGE_MAX_BODY_SIZE` - Maximum request body in bytes (default: 64 MiB)
//! - `EDGE_CORS_ORIGINS` - Comma-separated allowed origins (default: any)

use clap::Parser;

use crate::server::DEFAULT_BODY_LIMIT;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Smallest accepted body limit (1 KiB).
pub const MIN_BODY_SIZE: usize = 1024;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Edge Cleanup - blur an image and return its Canny edge map.
///
/// Serves `POST /process-image`, which takes a base64 data-URI image and
/// returns the edge map as a PNG data-URI.
#[derive(Parser, Debug, Clone)]
#[command(name = "edge-cleanup")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "EDGE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "EDGE_PORT")]
    pub port: u16,

    /// Maximum request body size in bytes.
    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT, env = "EDGE_MAX_BODY_SIZE")]
    pub max_body_size: usize,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "EDGE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.host.trim().is_empty() {
            return Err("host must not be empty. Set --host or EDGE_HOST".to_string());
        }

        if self.max_body_size < MIN_BODY_SIZE {
            return Err(format!(
                "max_body_size must be at least {} bytes",
                MIN_BODY_SIZE
            ));
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
