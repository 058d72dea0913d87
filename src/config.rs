use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

use crate::util::dates;

#[derive(Debug, Deserialize, Clone)]
struct FileConfig {
    pub database: FileDatabaseConfig,
    pub log: FileLogConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct FileDatabaseConfig {
    pub host: String,
    pub port: Option<u16>,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
struct FileLogConfig {
    pub level: String,
    pub path: Option<String>,
    pub json_path: Option<String>,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
    pub path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

fn expand_tilde(path: &str) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    if path.starts_with("~/") {
        let home = env::var("HOME")?;
        Ok(PathBuf::from(path.replacen("~", &home, 1)))
    } else {
        Ok(PathBuf::from(path))
    }
}

pub fn load_config() -> Result<AppConfig, Box<dyn std::error::Error + Send + Sync>> {
    let exe_path = env::current_exe()?;
    let config_path = match exe_path.parent() {
        Some(dir) => dir.join("cosmetiq.toml"),
        _ => return Err("failed to determine executable directory".into()),
    };

    if !config_path.exists() || !config_path.is_file() {
        return Err(format!(
            "Config file does not exist or is not a file: {}",
            config_path.display()
        )
        .into());
    }
    let s = fs::read_to_string(&config_path)?;
    let cfg: FileConfig = toml::from_str(&s)?;

    Ok(AppConfig {
        database: build_database_config(cfg.database),
        log: build_log_config(cfg.log)?,
    })
}

fn build_database_config(file_db: FileDatabaseConfig) -> DatabaseConfig {
    DatabaseConfig {
        host: file_db.host,
        port: file_db.port.unwrap_or(5432),
        dbname: file_db.dbname,
        user: file_db.user,
        password: file_db.password,
    }
}

fn build_log_config(
    file_log: FileLogConfig,
) -> Result<LogConfig, Box<dyn std::error::Error + Send + Sync>> {
    let path = match file_log.path.as_deref() {
        Some(p) => Some(validated_log_path(p)?),
        None => None,
    };
    let json_path = match file_log.json_path.as_deref() {
        Some(p) => Some(validated_log_path(p)?),
        None => None,
    };

    Ok(LogConfig {
        level: file_log.level,
        path,
        json_path,
    })
}

fn validated_log_path(cfg_path: &str) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    let path = log_file_replacements(cfg_path)?;

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            return Err(format!("Log file directory does not exist: {}", parent.display()).into());
        }
    }
    if path.exists() && !path.is_file() {
        return Err(format!("Log path exists but is not a file: {}", cfg_path).into());
    }

    Ok(path)
}

fn log_file_replacements(cfg_path: &str) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    let date_str = dates::local_date_yyyy_mm_dd();
    let replaced = cfg_path.replace("{DATE}", &date_str);
    expand_tilde(&replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [database]
        host = "localhost"
        dbname = "cosmetics_shop"
        user = "cosmetics_admin"
        password = "Cosmetics2025!"

        [log]
        level = "info"
    "#;

    #[test]
    fn parses_minimal_config() {
        let cfg: FileConfig = toml::from_str(SAMPLE).unwrap();
        let db = build_database_config(cfg.database);

        assert_eq!(db.host, "localhost");
        assert_eq!(db.port, 5432);
        assert_eq!(db.dbname, "cosmetics_shop");
        assert_eq!(db.user, "cosmetics_admin");

        let log = build_log_config(cfg.log).unwrap();
        assert_eq!(log.level, "info");
        assert!(log.path.is_none());
        assert!(log.json_path.is_none());
    }

    #[test]
    fn explicit_port_overrides_default() {
        let cfg: FileConfig =
            toml::from_str(&SAMPLE.replace("host = \"localhost\"", "host = \"localhost\"\nport = 5433"))
                .unwrap();
        assert_eq!(build_database_config(cfg.database).port, 5433);
    }

    #[test]
    fn date_placeholder_is_replaced() {
        let path = log_file_replacements("/tmp/cosmetiq-{DATE}.log").unwrap();
        let rendered = path.to_string_lossy().into_owned();
        assert!(!rendered.contains("{DATE}"));
        assert!(rendered.contains(&dates::local_date_yyyy_mm_dd()));
    }

    #[test]
    fn missing_database_section_is_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[log]\nlevel = \"info\"");
        assert!(result.is_err());
    }
}
