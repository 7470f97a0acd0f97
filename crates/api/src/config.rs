use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Errors raised while reading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the dispatcher behind a
/// local reverse proxy.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Explicit runner script path. `None` means `builder.sh` next to the
    /// executable.
    pub builder_script: Option<PathBuf>,
    /// Program used to run the script. `None` executes the script directly.
    pub builder_interpreter: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `127.0.0.1`                |
    /// | `PORT`                 | `5000`                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `BUILDER_SCRIPT`       | `<exe dir>/builder.sh`     |
    /// | `BUILDER_INTERPRETER`  | `bash` (empty: run direct) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_var(&lookup, "HOST", "127.0.0.1", "IP address")?;
        let port = parse_var(&lookup, "PORT", "5000", "u16")?;
        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30", "u64")?;

        let builder_script = lookup("BUILDER_SCRIPT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let builder_interpreter = match lookup("BUILDER_INTERPRETER") {
            None => Some("bash".to_string()),
            Some(value) => Some(value.trim().to_string()).filter(|s| !s.is_empty()),
        };

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            builder_script,
            builder_interpreter,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
