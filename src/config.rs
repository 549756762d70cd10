use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_ENVIRONMENT: &str = "dev";
pub const DEFAULT_ACTIVITY: &str = "Core Dumped";

/// Contents of `config.<env>.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppFile {
    #[serde(rename = "CLIENT_ID", default)]
    pub client_id: String,
    #[serde(rename = "GUILD_ID", default)]
    pub guild_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub discord_token: String,
    pub client_id: String,
    pub guild_id: String,
    pub log_level: String,
    pub activity: String,
}

impl Config {
    /// Loads `.env.<environment>` (if present) and `config.<environment>.json`
    /// from `dir`, then reads the remaining settings from the process environment.
    pub fn load(environment: &str, dir: &Path) -> Result<Self> {
        let env_file = dir.join(format!(".env.{}", environment));
        dotenvy::from_path(&env_file).ok();

        let file_path = dir.join(format!("config.{}.json", environment));
        let raw = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read config file {}", file_path.display()))?;
        let file = parse_app_file(&raw)
            .with_context(|| format!("Invalid config file {}", file_path.display()))?;

        Self::from_sources(
            environment,
            file,
            env::var("TOKEN").ok(),
            env::var("LOG_LEVEL").ok(),
            env::var("BOT_ACTIVITY").ok(),
        )
    }

    pub fn from_sources(
        environment: &str,
        file: AppFile,
        token: Option<String>,
        log_level: Option<String>,
        activity: Option<String>,
    ) -> Result<Self> {
        let discord_token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("TOKEN environment variable not set"))?;

        Ok(Config {
            environment: environment.to_string(),
            discord_token,
            client_id: file.client_id,
            guild_id: file.guild_id,
            log_level: log_level.unwrap_or_else(|| "info".to_string()),
            activity: activity.unwrap_or_else(|| DEFAULT_ACTIVITY.to_string()),
        })
    }

    pub fn application_id(&self) -> Result<u64> {
        parse_snowflake("CLIENT_ID", &self.client_id)
    }

    pub fn guild(&self) -> Result<u64> {
        parse_snowflake("GUILD_ID", &self.guild_id)
    }
}

pub fn parse_app_file(raw: &str) -> Result<AppFile> {
    Ok(serde_json::from_str(raw)?)
}

fn parse_snowflake(field: &str, value: &str) -> Result<u64> {
    if value.is_empty() {
        anyhow::bail!("{} is not set in the config file", field);
    }
    value
        .parse()
        .with_context(|| format!("{} must be a numeric id, got {:?}", field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(client_id: &str, guild_id: &str) -> AppFile {
        AppFile {
            client_id: client_id.to_string(),
            guild_id: guild_id.to_string(),
        }
    }

    #[test]
    fn test_parse_app_file() {
        let parsed =
            parse_app_file(r#"{"CLIENT_ID": "1100", "GUILD_ID": "2200", "EXTRA": true}"#).unwrap();
        assert_eq!(parsed.client_id, "1100");
        assert_eq!(parsed.guild_id, "2200");
    }

    #[test]
    fn test_parse_app_file_missing_fields_default_empty() {
        let parsed = parse_app_file("{}").unwrap();
        assert!(parsed.client_id.is_empty());
        assert!(parsed.guild_id.is_empty());
    }

    #[test]
    fn test_parse_app_file_rejects_garbage() {
        assert!(parse_app_file("not json").is_err());
    }

    #[test]
    fn test_config_missing_token() {
        let result = Config::from_sources("dev", file("1", "2"), None, None, None);
        assert!(result.is_err());

        let result = Config::from_sources("dev", file("1", "2"), Some("  ".into()), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_with_defaults() {
        let config =
            Config::from_sources("dev", file("1100", "2200"), Some("token".into()), None, None)
                .unwrap();
        assert_eq!(config.environment, "dev");
        assert_eq!(config.discord_token, "token");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.activity, DEFAULT_ACTIVITY);
        assert_eq!(config.application_id().unwrap(), 1100);
        assert_eq!(config.guild().unwrap(), 2200);
    }

    #[test]
    fn test_invalid_ids() {
        let config =
            Config::from_sources("prod", file("abc", ""), Some("token".into()), None, None)
                .unwrap();
        assert!(config.application_id().is_err());
        assert!(config.guild().is_err());
    }

    #[test]
    fn test_load_reads_json_file() {
        let dir = env::temp_dir().join(format!("core-dumped-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.test.json"),
            r#"{"CLIENT_ID": "42", "GUILD_ID": "7"}"#,
        )
        .unwrap();
        fs::write(dir.join(".env.test"), "TOKEN=from-env-file\n").unwrap();

        let config = Config::load("test", &dir).unwrap();
        assert_eq!(config.client_id, "42");
        assert_eq!(config.guild_id, "7");
        assert!(!config.discord_token.is_empty());

        assert!(Config::load("missing", &dir).is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
