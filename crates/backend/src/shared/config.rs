use contracts::shared::site::SiteInfo;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogApiConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Catalog store connection
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogApiConfig {
    /// Base URL of the four catalog endpoints, e.g. `http://localhost:5000/api`
    pub api_base_url: String,
    /// Per-call timeout; a timed out call is reported as unavailable
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub base_url: String,
    pub catalog_root: String,
    pub catalog_description: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[catalog]
api_base_url = "http://localhost:5000/api"
request_timeout_secs = 10

[site]
name = "Surveillance Solutions"
base_url = "https://www.example.com"
catalog_root = "/products"
catalog_description = "Browse IP cameras, video recorders and accessories for professional surveillance systems."
"#;

impl Config {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn normalize(&mut self) {
        self.catalog.api_base_url = self.catalog.api_base_url.trim_end_matches('/').to_string();
        self.site.base_url = self.site.base_url.trim_end_matches('/').to_string();
        let root = self.site.catalog_root.trim_end_matches('/');
        self.site.catalog_root = if root.is_empty() {
            String::new()
        } else {
            root.to_string()
        };
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (key, url) in [
            ("catalog.api_base_url", &self.catalog.api_base_url),
            ("site.base_url", &self.site.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://, got '{}'", key, url);
            }
        }
        if self.catalog.request_timeout_secs == 0 {
            anyhow::bail!("catalog.request_timeout_secs must be greater than zero");
        }
        if !self.site.catalog_root.is_empty() && !self.site.catalog_root.starts_with('/') {
            anyhow::bail!(
                "site.catalog_root must start with '/', got '{}'",
                self.site.catalog_root
            );
        }
        Ok(())
    }

    pub fn site_info(&self) -> SiteInfo {
        SiteInfo {
            name: self.site.name.clone(),
            base_url: self.site.base_url.clone(),
            catalog_root: self.site.catalog_root.clone(),
            catalog_description: self.site.catalog_description.clone(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address {}:{}: {}", self.host, self.port, e))
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return Config::from_toml(&contents)
                    .map_err(|e| anyhow::anyhow!("{}: {}", config_path.display(), e));
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Config::from_toml(DEFAULT_CONFIG)
}
