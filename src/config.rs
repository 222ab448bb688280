use crate::error::{Result, WatsonRssError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// 外部ハンドラとして起動するコマンド
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,
    /// ハンドラ名 → コマンド
    #[serde(default)]
    pub handlers: BTreeMap<String, HandlerCommand>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WatsonRssError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("watson-rss").join("config.json"))
    }

    pub fn set_credentials_path(&mut self, path: PathBuf) {
        self.credentials_path = Some(path);
    }

    pub fn set_handler(&mut self, name: String, command: HandlerCommand) {
        self.handlers.insert(name, command);
    }
}

/// `NAME=COMMAND ARGS...` 形式のハンドラ設定を解析
pub fn parse_handler_assignment(s: &str) -> Result<(String, HandlerCommand)> {
    let (name, command_line) = s
        .split_once('=')
        .ok_or_else(|| WatsonRssError::Config(format!("NAME=COMMAND 形式で指定してください: {}", s)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(WatsonRssError::Config(format!("ハンドラ名が空です: {}", s)));
    }

    let mut words = command_line.split_whitespace().map(String::from);
    let program = words
        .next()
        .ok_or_else(|| WatsonRssError::Config(format!("コマンドが空です: {}", s)))?;

    Ok((
        name.to_string(),
        HandlerCommand {
            program,
            args: words.collect(),
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_handler_assignment() {
        let (name, cmd) = parse_handler_assignment("rss-crawl=python crawl.py --all").unwrap();
        assert_eq!(name, "rss-crawl");
        assert_eq!(cmd.program, "python");
        assert_eq!(cmd.args, vec!["crawl.py", "--all"]);
    }

    #[test]
    fn test_parse_handler_assignment_errors() {
        assert!(parse_handler_assignment("rss-crawl").is_err());
        assert!(parse_handler_assignment("=crawl").is_err());
        assert!(parse_handler_assignment("rss-crawl=   ").is_err());
    }

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.credentials_path.is_none());
        assert!(config.handlers.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_credentials_path(PathBuf::from("/tmp/creds.json"));
        config.set_handler(
            "rss-crawl".into(),
            HandlerCommand {
                program: "crawl".into(),
                args: vec![],
            },
        );
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.credentials_path, Some(PathBuf::from("/tmp/creds.json")));
        assert_eq!(loaded.handlers["rss-crawl"].program, "crawl");
    }

    #[test]
    fn test_args_default_to_empty() {
        let config: Config =
            serde_json::from_str(r#"{"handlers": {"rss-crawl": {"program": "crawl"}}}"#).unwrap();
        assert!(config.handlers["rss-crawl"].args.is_empty());
    }
}
