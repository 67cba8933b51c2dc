use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 3000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    #[serde(default)]
    pub path: String,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 {
                self.worker_threads = Some(4);
            }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl StorageConfig {
    /// TOML wins; `COMMENTS_PATH` fills the gap; otherwise the built-in default.
    pub fn normalize_from_env(&mut self) {
        if self.path.trim().is_empty() {
            if let Ok(path) = std::env::var("COMMENTS_PATH") {
                self.path = path;
            }
        }
        if self.path.trim().is_empty() {
            self.path = "data/comments.json".to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.path.to_lowercase().ends_with(".json") {
            return Err(anyhow!("storage.path must point at a .json document"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_sections() {
        let cfg: AppConfig = toml::from_str("").expect("parse");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert!(cfg.storage.path.is_empty());
    }

    #[test]
    fn full_document_parses_and_validates() {
        let mut cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [storage]
            path = "state/records.json"
            "#,
        )
        .expect("parse");
        cfg.normalize_and_validate().expect("validate");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.storage.path, "state/records.json");
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg: AppConfig = toml::from_str("[server]\nhost = \"x\"\nport = 0")
            .expect("parse");
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn non_json_storage_path_is_rejected() {
        let cfg = StorageConfig { path: "comments.txt".into() };
        assert!(cfg.validate().is_err());
    }

    // The env interactions live in one test so nothing races on the variable.
    #[test]
    fn storage_path_resolution_order() {
        std::env::remove_var("COMMENTS_PATH");
        let mut cfg = StorageConfig::default();
        cfg.normalize_from_env();
        assert_eq!(cfg.path, "data/comments.json");

        std::env::set_var("COMMENTS_PATH", "elsewhere/comments.json");
        let mut cfg = StorageConfig::default();
        cfg.normalize_from_env();
        assert_eq!(cfg.path, "elsewhere/comments.json");

        // An explicit TOML value is never overridden.
        let mut cfg = StorageConfig { path: "pinned/comments.json".into() };
        cfg.normalize_from_env();
        assert_eq!(cfg.path, "pinned/comments.json");
        std::env::remove_var("COMMENTS_PATH");
    }
}
