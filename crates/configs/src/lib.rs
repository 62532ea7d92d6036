use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// `Development` enables the API docs UI.
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: Some(4),
            environment: default_environment(),
        }
    }
}

/// Names the in-memory database instance a service opens.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub default_connection: String,
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_environment() -> String { "Development".into() }

/// Load `CONFIG_PATH`, or `config/<service>.toml` when unset.
pub fn load_for_service(service: &str) -> Result<AppConfig> {
    load_from_file(&config_path_with(service, |key| std::env::var(key).ok()))
}

fn config_path_with<F>(service: &str, get: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    get("CONFIG_PATH").unwrap_or_else(|| format!("config/{service}.toml"))
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content).with_context(|| format!("invalid config file {path}"))
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    /// Read the service's config file. Only a missing file falls back to
    /// `defaults` overlaid with environment variables; any other failure is returned.
    pub fn load_and_validate(service: &str, defaults: AppConfig) -> Result<Self> {
        Self::load_and_validate_with(service, defaults, |key| std::env::var(key).ok())
    }

    /// [`AppConfig::load_and_validate`] with environment lookups routed through `get`.
    pub fn load_and_validate_with<F>(service: &str, defaults: AppConfig, get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = config_path_with(service, &get);
        let mut cfg = match load_from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => {
                let mut cfg = defaults;
                cfg.overlay_env_with(&get);
                cfg
            }
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Apply `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`,
    /// `APP_ENVIRONMENT` and `DEFAULT_CONNECTION` from `get`.
    pub fn overlay_env_with<F>(&mut self, get: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = get("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = get("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(env) = get("APP_ENVIRONMENT") {
            self.server.environment = env;
        }
        if let Some(conn) = get("DEFAULT_CONNECTION") {
            self.database.default_connection = conn;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        if self.environment.trim().is_empty() {
            self.environment = default_environment();
        }
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment.trim().eq_ignore_ascii_case("development")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.default_connection.trim().is_empty() {
            if let Ok(conn) = std::env::var("DEFAULT_CONNECTION") {
                self.default_connection = conn;
            }
        }
        self.default_connection = self.default_connection.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_connection.is_empty() {
            return Err(anyhow!(
                "database.default_connection is empty; set it in the config file or DEFAULT_CONNECTION"
            ));
        }
        Ok(())
    }
}
