//! Runtime configuration
//!
//! Read from environment variables at startup:
//! - `CALORIC_DATABASE_PATH`: SQLite file for the local sink
//! - `CALORIC_SAVE_ENDPOINT`: when set, records are POSTed here instead

use std::path::{Path, PathBuf};

pub const DATABASE_PATH_VAR: &str = "CALORIC_DATABASE_PATH";
pub const SAVE_ENDPOINT_VAR: &str = "CALORIC_SAVE_ENDPOINT";

/// Where saved records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkConfig {
    Sqlite,
    Http { url: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub sink: SinkConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(DATABASE_PATH_VAR).ok(),
            std::env::var(SAVE_ENDPOINT_VAR).ok(),
        )
    }

    fn from_vars(database_path: Option<String>, save_endpoint: Option<String>) -> Self {
        let database_path = database_path
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let sink = match save_endpoint.map(|u| u.trim().to_string()) {
            Some(url) if !url.is_empty() => SinkConfig::Http { url },
            _ => SinkConfig::Sqlite,
        };

        Self { database_path, sink }
    }
}

/// `<project>/data/caloric_needs.db`, found relative to the executable
fn default_database_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut path = project_root(exe_dir);
    path.push("data");
    path.push("caloric_needs.db");
    path
}

/// Go up from target/release or target/debug to project root
fn project_root(mut dir: PathBuf) -> PathBuf {
    if dir.ends_with("release") || dir.ends_with("debug") {
        if let Some(grandparent) = dir.parent().and_then(Path::parent) {
            dir = grandparent.to_path_buf();
        }
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_sqlite_sink() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.sink, SinkConfig::Sqlite);
        assert!(config.database_path.ends_with("data/caloric_needs.db"));
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_vars(
            Some("/tmp/records.db".to_string()),
            Some(" https://example.test/save ".to_string()),
        );
        assert_eq!(config.database_path, PathBuf::from("/tmp/records.db"));
        assert_eq!(
            config.sink,
            SinkConfig::Http {
                url: "https://example.test/save".to_string()
            }
        );
    }

    #[test]
    fn test_blank_endpoint_is_ignored() {
        let config = Config::from_vars(None, Some("   ".to_string()));
        assert_eq!(config.sink, SinkConfig::Sqlite);
    }

    #[test]
    fn test_project_root_strips_target_dir() {
        assert_eq!(
            project_root(PathBuf::from("/work/app/target/release")),
            PathBuf::from("/work/app")
        );
        assert_eq!(project_root(PathBuf::from("/usr/bin")), PathBuf::from("/usr/bin"));
    }
}
