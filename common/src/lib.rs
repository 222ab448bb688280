//! Watson RSS Common Library
//!
//! 設定シートのレイアウト定義とメニュー定義（CLIと各ホストで共有）

pub mod error;
pub mod layout;
pub mod menu;
pub mod slot;

pub use error::{Error, Result};
pub use layout::{
    field_label, load_configuration, load_field_index, ConfigSet, FieldIndex, SheetLayout,
    FIELD_COUNT, FIELD_INDEX, SHEET_LAYOUT,
};
pub use menu::{watson_menu, Menu, MenuAction, MenuEntry, MenuItem, CHECK_CLASSIFIERS_HANDLER};
pub use slot::{ClassifierColumns, ClassifierSlot, NB_CLFS};
