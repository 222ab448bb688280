//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown handler: {0}")]
    UnknownHandler(String),

    #[error("Invalid classifier slot: {0} (1-3)")]
    InvalidSlot(usize),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_handler() {
        let error = Error::UnknownHandler("rss-foo".to_string());
        assert_eq!(format!("{}", error), "Unknown handler: rss-foo");
    }

    #[test]
    fn test_error_display_invalid_slot() {
        let error = Error::InvalidSlot(4);
        assert_eq!(format!("{}", error), "Invalid classifier slot: 4 (1-3)");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownHandler("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownHandler"));
        assert!(debug.contains("テスト"));
    }
}
