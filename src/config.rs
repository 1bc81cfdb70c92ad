use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "creatorhub",
    about = "REST API backend for a social content-creator platform"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// MongoDB connection string
    #[arg(long)]
    pub mongodb_uri: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub uri: String,
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://127.0.0.1:27017".to_string(),
            name: "creatorhub".to_string(),
        }
    }
}

impl Config {
    /// Precedence: defaults < config file < environment < CLI flags.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = cli.config.clone().unwrap_or_else(default_config_path);

        let mut config: Config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Environment fallbacks, the deployment-facing knobs
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(uri) = std::env::var("MONGODB_URI") {
            config.database.uri = uri;
        }
        if let Ok(name) = std::env::var("MONGODB_DB") {
            config.database.name = name;
        }

        // CLI overrides
        if let Some(ref host) = cli.host {
            config.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(ref uri) = cli.mongodb_uri {
            config.database.uri = uri.clone();
        }

        Ok(config)
    }
}

fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".creatorhub").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            config: None,
            host: None,
            port: None,
            mongodb_uri: None,
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.uri, "mongodb://127.0.0.1:27017");
        assert_eq!(config.database.name, "creatorhub");
    }

    #[test]
    fn load_reads_toml_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[server]
host = "127.0.0.1"

[database]
uri = "mongodb://db.internal:27017"
name = "creatorhub_staging"
"#,
        )
        .unwrap();

        let cli = Cli {
            config: Some(config_path),
            ..bare_cli()
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.uri, "mongodb://db.internal:27017");
        assert_eq!(config.database.name, "creatorhub_staging");
    }

    #[test]
    fn cli_overrides_beat_toml_values() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
[server]
host = "192.168.1.1"

[database]
uri = "mongodb://from-file:27017"
"#,
        )
        .unwrap();

        let cli = Cli {
            config: Some(config_path),
            host: Some("10.0.0.1".to_string()),
            mongodb_uri: Some("mongodb://from-cli:27017".to_string()),
            ..bare_cli()
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.database.uri, "mongodb://from-cli:27017");
    }

    #[test]
    fn load_with_missing_config_file_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(tmp.path().join("does-not-exist.toml")),
            ..bare_cli()
        };
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.name, "creatorhub");
    }
}
