use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE: &str = "atlasog.db";
pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AtlasConfig {
    pub database: Option<String>,
    pub bind: Option<String>,
    pub port: Option<u16>,
}

impl AtlasConfig {
    /// Config written by `atlasog init`
    pub fn starter() -> Self {
        Self {
            database: Some(DEFAULT_DATABASE.to_string()),
            bind: Some(DEFAULT_BIND.to_string()),
            port: Some(DEFAULT_PORT),
        }
    }

    /// CLI flag, then config file, then built-in default
    pub fn resolve_database(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    pub fn resolve_bind(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.bind.clone())
            .unwrap_or_else(|| DEFAULT_BIND.to_string())
    }

    pub fn resolve_port(&self, flag: Option<u16>) -> u16 {
        flag.or(self.port).unwrap_or(DEFAULT_PORT)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("atlasog.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<AtlasConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: AtlasConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &AtlasConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("atlasog.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlasog.toml");

        write_config(&path, &AtlasConfig::starter(), false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, AtlasConfig::starter());
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlasog.toml");

        write_config(&path, &AtlasConfig::default(), false).unwrap();
        assert!(write_config(&path, &AtlasConfig::starter(), false).is_err());
        write_config(&path, &AtlasConfig::starter(), true).unwrap();
    }

    #[test]
    fn test_partial_config() {
        let config: AtlasConfig = toml::from_str("port = 9000\n").unwrap();
        assert_eq!(config.resolve_port(None), 9000);
        assert_eq!(config.resolve_bind(None), DEFAULT_BIND);
        assert_eq!(config.resolve_database(None), PathBuf::from(DEFAULT_DATABASE));
    }

    #[test]
    fn test_flag_wins_over_file() {
        let config = AtlasConfig {
            database: Some("data/notes.db".to_string()),
            bind: Some("0.0.0.0".to_string()),
            port: Some(9000),
        };
        assert_eq!(config.resolve_database(Some(PathBuf::from("other.db"))), PathBuf::from("other.db"));
        assert_eq!(config.resolve_database(None), PathBuf::from("data/notes.db"));
        assert_eq!(config.resolve_port(Some(8080)), 8080);
        assert_eq!(config.resolve_bind(Some("::1".to_string())), "::1");
    }

    #[test]
    fn test_ensure_db_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("a").join("b").join("atlasog.db");

        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
        ensure_db_dir(Path::new("atlasog.db")).unwrap();
    }
}
