//! Daemon configuration.
//!
//! Read from an optional `tubctl.toml` in the working directory, then
//! overridden by `TUBCTL_*` environment variables (and `RUST_LOG` for the
//! log filter). Missing keys keep their defaults.

use serde::Deserialize;

use tubctl_adapter_http_axum::auth::{DEFAULT_IDENTITY_HEADER, DEFAULT_LOGIN_URL};
use tubctl_domain::time::{DEFAULT_DISPLAY_ZONE, DisplayZone, UnknownZoneError};

const CONFIG_FILE: &str = "tubctl.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub actuator: ActuatorConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL.
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives.
    pub filter: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// IANA zone pages and exports are rendered in.
    pub timezone: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ActuatorConfig {
    /// Relay command URL; `value=0|1` is appended per command.
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Header the reverse proxy puts the signed-in user in.
    pub identity_header: String,
    /// Sign-in endpoint, receives the return target in `rd`.
    pub login_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:tubctl.db".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "tubctld=info,tubctl=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_DISPLAY_ZONE.to_string(),
        }
    }
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8081/relay?pin=0".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            identity_header: DEFAULT_IDENTITY_HEADER.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
        }
    }
}

impl Config {
    /// Load `tubctl.toml` and the process environment, then validate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file is unreadable or malformed,
    /// or when the merged configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Self::parse(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(ConfigError::Io(err)),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay values found through `lookup`. Unparseable ports are ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let port = |value: &str| value.parse::<u16>().ok();

        if let Some(host) = lookup("TUBCTL_HOST") {
            self.server.host = host;
        }
        if let Some(value) = lookup("TUBCTL_PORT").as_deref().and_then(port) {
            self.server.port = value;
        }
        if let Some(bind) = lookup("TUBCTL_BIND") {
            if let Some((host, value)) = bind.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Some(value) = port(value) {
                    self.server.port = value;
                }
            }
        }

        if let Some(filter) = lookup("RUST_LOG").or_else(|| lookup("TUBCTL_LOG")) {
            self.logging.filter = filter;
        }

        let strings: [(&str, &mut String); 5] = [
            ("TUBCTL_DATABASE_URL", &mut self.database.url),
            ("TUBCTL_TIMEZONE", &mut self.display.timezone),
            ("TUBCTL_ACTUATOR_URL", &mut self.actuator.url),
            ("TUBCTL_IDENTITY_HEADER", &mut self.auth.identity_header),
            ("TUBCTL_LOGIN_URL", &mut self.auth.login_url),
        ];
        for (key, slot) in strings {
            if let Some(value) = lookup(key) {
                *slot = value;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        self.display_zone()?;
        url::Url::parse(&self.actuator.url).map_err(|source| ConfigError::ActuatorUrl {
            url: self.actuator.url.clone(),
            source,
        })?;
        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Resolve the configured zone against the bundled timezone database.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownZoneError`] for a zone name it does not know.
    pub fn display_zone(&self) -> Result<DisplayZone, UnknownZoneError> {
        self.display.timezone.parse()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read tubctl.toml")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tubctl.toml")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: port must be non-zero")]
    ZeroPort,
    #[error("invalid configuration: {0}")]
    Zone(#[from] UnknownZoneError),
    #[error("invalid configuration: actuator url {url:?}: {source}")]
    ActuatorUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
