//! 外部コマンドとしてハンドラを実行する
//!
//! ハンドラ名ごとに設定されたプログラムを引数なしで起動する
//! （設定ファイルに書かれた固定引数は除く）。
//! バインディングは環境変数で渡す。

use super::Handlers;
use crate::config::HandlerCommand;
use crate::context::Bindings;
use crate::credentials::{ENV_PASSWORD, ENV_URL, ENV_USERNAME};
use crate::error::{Result, WatsonRssError};
use std::collections::BTreeMap;
use std::process::Command;
use watson_rss_common::{MenuAction, CHECK_CLASSIFIERS_HANDLER};

pub const ENV_SS_ID: &str = "WATSON_RSS_SS_ID";
pub const ENV_WORKBOOK: &str = "WATSON_RSS_WORKBOOK";
/// スプレッドシートIDと設定メタデータ（JSON）
pub const ENV_CONFIG: &str = "WATSON_RSS_CONFIG";

pub struct CommandHandlers {
    commands: BTreeMap<String, HandlerCommand>,
    verbose: bool,
}

impl CommandHandlers {
    pub fn new(commands: BTreeMap<String, HandlerCommand>, verbose: bool) -> Self {
        Self { commands, verbose }
    }

    fn run(&self, name: &str, bindings: &Bindings) -> Result<()> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| WatsonRssError::HandlerNotConfigured(name.to_string()))?;

        let config_set = serde_json::to_string(&bindings.config_set())?;

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .env(ENV_SS_ID, bindings.document_id.as_str())
            .env(ENV_CONFIG, config_set)
            .env(ENV_URL, &bindings.credentials.url)
            .env(ENV_USERNAME, &bindings.credentials.username)
            .env(ENV_PASSWORD, &bindings.credentials.password);
        if let Some(path) = &bindings.document.path {
            cmd.env(ENV_WORKBOOK, path);
        }

        tracing::info!(handler = name, program = %command.program, "handler started");

        let output = cmd.output().map_err(|e| WatsonRssError::HandlerFailed {
            name: name.to_string(),
            message: format!("起動できません: {}", e),
        })?;

        if self.verbose {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let preview: String = stdout.chars().take(500).collect();
            println!("  [{}] {}", name, preview.trim_end());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(handler = name, code = ?output.status.code(), "handler failed");
            return Err(WatsonRssError::HandlerFailed {
                name: name.to_string(),
                message: format!("code {:?}: {}", output.status.code(), stderr.trim_end()),
            });
        }

        tracing::info!(handler = name, "handler finished");
        Ok(())
    }
}

impl Handlers for CommandHandlers {
    fn invoke(&mut self, action: MenuAction, bindings: &Bindings) -> Result<()> {
        self.run(action.handler_name(), bindings)
    }

    fn check_classifiers(&mut self, bindings: &Bindings) -> Result<()> {
        self.run(CHECK_CLASSIFIERS_HANDLER, bindings)
    }
}
