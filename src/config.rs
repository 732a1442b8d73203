use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("tracker.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("tracker.db")
}

/// Pick the database: explicit flag, then config file, then `tracker.db`
pub fn resolve_database(flag: Option<PathBuf>, config: Option<&TrackerConfig>) -> PathBuf {
    flag.or_else(|| config.and_then(|c| c.database.as_ref()).map(PathBuf::from))
        .unwrap_or_else(default_database_path)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TrackerConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("reading tracker config {}", path.display()))?;
    let config: TrackerConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing tracker config {}", path.display()))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &TrackerConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)
        .with_context(|| format!("writing tracker config {}", path.display()))?;
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
        let loaded = load_config(Some(&dir.path().join("tracker.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");
        let config = TrackerConfig { database: Some("data/parcels.db".to_string()) };

        write_config(&path, &config, false).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(config.clone()));

        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &TrackerConfig::default(), true).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), Some(TrackerConfig::default()));
    }

    #[test]
    fn test_malformed_config_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.toml");
        std::fs::write(&path, "database = [").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("parsing tracker config"));
        assert!(message.contains("tracker.toml"));
    }

    #[test]
    fn test_resolve_database_precedence() {
        let config = TrackerConfig { database: Some("from-config.db".to_string()) };

        assert_eq!(
            resolve_database(Some(PathBuf::from("flag.db")), Some(&config)),
            PathBuf::from("flag.db")
        );
        assert_eq!(resolve_database(None, Some(&config)), PathBuf::from("from-config.db"));
        assert_eq!(resolve_database(None, None), default_database_path());
    }

    #[test]
    fn test_ensure_db_dir() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("tracker.db");

        ensure_db_dir(&db).unwrap();
        assert!(dir.path().join("nested").is_dir());
        ensure_db_dir(Path::new("tracker.db")).unwrap();
    }
}
