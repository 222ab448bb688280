//! メニュー定義
//!
//! メニュー項目は型付きの [`MenuAction`] に結びつける。
//! ハンドラ名の文字列はプロセス境界（外部コマンド設定・CLI引数）でのみ使う。

use crate::error::{Error, Result};
use crate::slot::ClassifierSlot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// トップレベルメニュー名
pub const MENU_TITLE: &str = "Watson";
/// 削除サブメニュー名
pub const DELETE_MENU_TITLE: &str = "削除";
/// 分類器チェック（メニュー登録後に実行）のハンドラ名
pub const CHECK_CLASSIFIERS_HANDLER: &str = "check-classifiers";

/// メニューから起動される処理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MenuAction {
    /// データ取得
    Crawl,
    /// 全件分類
    ClassifyAll,
    /// 全分類器学習
    TrainAll,
    /// 分類器削除
    DeleteClassifier(ClassifierSlot),
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Crawl,
        MenuAction::ClassifyAll,
        MenuAction::TrainAll,
        MenuAction::DeleteClassifier(ClassifierSlot::One),
        MenuAction::DeleteClassifier(ClassifierSlot::Two),
        MenuAction::DeleteClassifier(ClassifierSlot::Three),
    ];

    /// 外部ハンドラ名
    pub fn handler_name(&self) -> &'static str {
        match self {
            MenuAction::Crawl => "rss-crawl",
            MenuAction::ClassifyAll => "rss-classify-all",
            MenuAction::TrainAll => "rss-train-all",
            MenuAction::DeleteClassifier(ClassifierSlot::One) => "classifier-1-delete",
            MenuAction::DeleteClassifier(ClassifierSlot::Two) => "classifier-2-delete",
            MenuAction::DeleteClassifier(ClassifierSlot::Three) => "classifier-3-delete",
        }
    }

    /// メニュー表示名
    pub fn label(&self) -> String {
        match self {
            MenuAction::Crawl => "データ取得".into(),
            MenuAction::ClassifyAll => "分類".into(),
            MenuAction::TrainAll => "学習".into(),
            MenuAction::DeleteClassifier(slot) => slot.label(),
        }
    }
}

impl FromStr for MenuAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MenuAction::ALL
            .into_iter()
            .find(|action| action.handler_name() == s)
            .ok_or_else(|| Error::UnknownHandler(s.to_string()))
    }
}

impl TryFrom<String> for MenuAction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MenuAction> for String {
    fn from(action: MenuAction) -> String {
        action.handler_name().to_string()
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.handler_name())
    }
}

/// メニュー項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub action: MenuAction,
}

/// メニューのエントリ（項目またはサブメニュー）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum MenuEntry {
    Item(MenuItem),
    SubMenu(Menu),
}

/// メニュー（ビルダー形式で組み立てる）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub title: String,
    pub entries: Vec<MenuEntry>,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_item(mut self, label: impl Into<String>, action: MenuAction) -> Self {
        self.entries.push(MenuEntry::Item(MenuItem {
            label: label.into(),
            action,
        }));
        self
    }

    pub fn add_sub_menu(mut self, menu: Menu) -> Self {
        self.entries.push(MenuEntry::SubMenu(menu));
        self
    }

    /// サブメニューをタイトルで検索
    pub fn sub_menu(&self, title: &str) -> Option<&Menu> {
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::SubMenu(menu) if menu.title == title => Some(menu),
            _ => None,
        })
    }

    /// 表示名からアクションを検索（サブメニューも含む）
    pub fn find_action(&self, label: &str) -> Option<MenuAction> {
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::Item(item) if item.label == label => Some(item.action),
            MenuEntry::Item(_) => None,
            MenuEntry::SubMenu(menu) => menu.find_action(label),
        })
    }

    /// 全アクション（表示順）
    pub fn actions(&self) -> Vec<MenuAction> {
        let mut actions = Vec::new();
        for entry in &self.entries {
            match entry {
                MenuEntry::Item(item) => actions.push(item.action),
                MenuEntry::SubMenu(menu) => actions.extend(menu.actions()),
            }
        }
        actions
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        writeln!(f, "{}{}", indent, self.title)?;
        for entry in &self.entries {
            match entry {
                MenuEntry::Item(item) => {
                    writeln!(f, "{}  - {} ({})", indent, item.label, item.action)?;
                }
                MenuEntry::SubMenu(menu) => menu.write_tree(f, depth + 1)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

/// Watsonメニューを構築
pub fn watson_menu() -> Menu {
    let delete_menu = ClassifierSlot::ALL
        .into_iter()
        .map(MenuAction::DeleteClassifier)
        .fold(Menu::new(DELETE_MENU_TITLE), |menu, action| {
            menu.add_item(action.label(), action)
        });

    Menu::new(MENU_TITLE)
        .add_item("データ取得", MenuAction::Crawl)
        .add_item("分類", MenuAction::ClassifyAll)
        .add_item("学習", MenuAction::TrainAll)
        .add_sub_menu(delete_menu)
}
