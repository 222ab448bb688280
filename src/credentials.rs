//! クレデンシャル読み込み
//!
//! 分類サービスの認証情報は起動時に一度だけ読み込み、
//! 以降は [`crate::context::Bindings`] が保持する。

use crate::error::{Result, WatsonRssError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const ENV_URL: &str = "WATSON_NLC_URL";
pub const ENV_USERNAME: &str = "WATSON_NLC_USERNAME";
pub const ENV_PASSWORD: &str = "WATSON_NLC_PASSWORD";

/// 分類サービスのクレデンシャル
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// クレデンシャル取得元
pub trait CredentialLoader {
    fn load_creds(&self) -> Result<Credentials>;
}

/// JSONファイルからクレデンシャルを読み込む
///
/// 環境変数 `WATSON_NLC_URL` / `WATSON_NLC_USERNAME` / `WATSON_NLC_PASSWORD`
/// が3つとも設定されていればファイルより優先する。
#[derive(Debug, Clone, Default)]
pub struct FileCredentialLoader {
    path: Option<PathBuf>,
    use_env: bool,
}

impl FileCredentialLoader {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path, use_env: true }
    }

    /// 環境変数を見ずにファイルだけを読む
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            use_env: false,
        }
    }

    fn from_env() -> Option<Credentials> {
        let url = std::env::var(ENV_URL).ok()?;
        let username = std::env::var(ENV_USERNAME).ok()?;
        let password = std::env::var(ENV_PASSWORD).ok()?;
        Some(Credentials { url, username, password })
    }

    fn from_file(path: &Path) -> Result<Credentials> {
        if !path.exists() {
            return Err(WatsonRssError::CredentialLoad(format!(
                "ファイルが見つかりません: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let creds: Credentials = serde_json::from_str(&content)
            .map_err(|e| WatsonRssError::CredentialLoad(format!("{}: {}", path.display(), e)))?;

        if creds.url.is_empty() || creds.username.is_empty() {
            return Err(WatsonRssError::CredentialLoad(format!(
                "url/username が空です: {}",
                path.display()
            )));
        }

        Ok(creds)
    }
}

impl CredentialLoader for FileCredentialLoader {
    fn load_creds(&self) -> Result<Credentials> {
        if self.use_env {
            if let Some(creds) = Self::from_env() {
                tracing::debug!("credentials loaded from environment");
                return Ok(creds);
            }
        }

        let path = self.path.as_deref().ok_or(WatsonRssError::MissingCredentials)?;
        let creds = Self::from_file(path)?;
        tracing::debug!(path = %path.display(), "credentials loaded from file");
        Ok(creds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::tempdir;

    // プロセス環境変数を触るテストを直列化する
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [ENV_URL, ENV_USERNAME, ENV_PASSWORD] {
            std::env::remove_var(key);
        }
    }

    fn write_creds(dir: &Path) -> PathBuf {
        let path = dir.join("creds.json");
        std::fs::write(
            &path,
            r#"{"url": "https://file.example.com", "username": "file-user", "password": "file-pass"}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials {
            url: "https://example.com/nlc".into(),
            username: "user".into(),
            password: "secret".into(),
        };
        let debug = format!("{:?}", creds);
        assert!(debug.contains("user"));
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("creds.json");
        std::fs::write(
            &path,
            r#"{"url": "https://example.com/nlc", "username": "u", "password": "p"}"#,
        )
        .unwrap();

        let creds = FileCredentialLoader::file_only(&path).load_creds().unwrap();
        assert_eq!(creds.username, "u");
        assert_eq!(creds.password, "p");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let loader = FileCredentialLoader::file_only(dir.path().join("none.json"));
        assert!(matches!(loader.load_creds(), Err(WatsonRssError::CredentialLoad(_))));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("creds.json");
        std::fs::write(&path, r#"{"url": "x"}"#).unwrap();

        let loader = FileCredentialLoader::file_only(&path);
        assert!(matches!(loader.load_creds(), Err(WatsonRssError::CredentialLoad(_))));
    }

    #[test]
    fn test_empty_username_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("creds.json");
        std::fs::write(&path, r#"{"url": "x", "username": "", "password": "p"}"#).unwrap();

        let loader = FileCredentialLoader::file_only(&path);
        assert!(matches!(loader.load_creds(), Err(WatsonRssError::CredentialLoad(_))));
    }

    #[test]
    fn test_no_path_without_env() {
        let loader = FileCredentialLoader {
            path: None,
            use_env: false,
        };
        assert!(matches!(loader.load_creds(), Err(WatsonRssError::MissingCredentials)));
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempdir().unwrap();
        let path = write_creds(dir.path());

        std::env::set_var(ENV_URL, "https://env.example.com");
        std::env::set_var(ENV_USERNAME, "env-user");
        std::env::set_var(ENV_PASSWORD, "env-pass");

        let from_file = FileCredentialLoader::new(Some(path)).load_creds();
        let without_file = FileCredentialLoader::new(None).load_creds();
        clear_env();

        let creds = from_file.unwrap();
        assert_eq!(creds.url, "https://env.example.com");
        assert_eq!(creds.username, "env-user");
        assert_eq!(creds.password, "env-pass");
        assert_eq!(without_file.unwrap(), creds);
    }

    #[test]
    fn test_partial_env_falls_back_to_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempdir().unwrap();
        let path = write_creds(dir.path());

        clear_env();
        std::env::set_var(ENV_URL, "https://env.example.com");
        std::env::set_var(ENV_USERNAME, "env-user");

        let from_file = FileCredentialLoader::new(Some(path)).load_creds();
        let without_file = FileCredentialLoader::new(None).load_creds();
        clear_env();

        let creds = from_file.unwrap();
        assert_eq!(creds.url, "https://file.example.com");
        assert_eq!(creds.username, "file-user");
        assert!(matches!(without_file, Err(WatsonRssError::MissingCredentials)));
    }

    #[test]
    fn test_file_only_ignores_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempdir().unwrap();
        let path = write_creds(dir.path());

        std::env::set_var(ENV_URL, "https://env.example.com");
        std::env::set_var(ENV_USERNAME, "env-user");
        std::env::set_var(ENV_PASSWORD, "env-pass");

        let result = FileCredentialLoader::file_only(&path).load_creds();
        clear_env();

        assert_eq!(result.unwrap().username, "file-user");
    }
}
