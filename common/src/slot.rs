//! 分類器スロット
//!
//! 設定シートは最大3つの分類器を並列に扱う。
//! 各スロットは インテント/分類結果/確信度/分類日時 の4列を持つ。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 分類器数
pub const NB_CLFS: usize = 3;

/// 分類器スロット (1..=3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum ClassifierSlot {
    One,
    Two,
    Three,
}

impl ClassifierSlot {
    /// 全スロット（番号順）
    pub const ALL: [ClassifierSlot; NB_CLFS] =
        [ClassifierSlot::One, ClassifierSlot::Two, ClassifierSlot::Three];

    /// スロット番号 (1始まり)
    pub fn number(self) -> usize {
        match self {
            ClassifierSlot::One => 1,
            ClassifierSlot::Two => 2,
            ClassifierSlot::Three => 3,
        }
    }

    pub fn from_number(number: usize) -> Result<Self> {
        match number {
            1 => Ok(ClassifierSlot::One),
            2 => Ok(ClassifierSlot::Two),
            3 => Ok(ClassifierSlot::Three),
            n => Err(Error::InvalidSlot(n)),
        }
    }

    /// メニュー表示名 (分類器1 など)
    pub fn label(self) -> String {
        format!("分類器{}", self.number())
    }
}

impl TryFrom<usize> for ClassifierSlot {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Self::from_number(value)
    }
}

impl From<ClassifierSlot> for usize {
    fn from(slot: ClassifierSlot) -> usize {
        slot.number()
    }
}

impl fmt::Display for ClassifierSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// 1スロット分の列オフセット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierColumns {
    pub intent: usize,
    pub result: usize,
    pub confidence: usize,
    pub timestamp: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_numbers() {
        let numbers: Vec<usize> = ClassifierSlot::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_number_roundtrip() {
        for slot in ClassifierSlot::ALL {
            assert_eq!(ClassifierSlot::from_number(slot.number()).unwrap(), slot);
        }
    }

    #[test]
    fn test_from_number_out_of_range() {
        assert!(matches!(ClassifierSlot::from_number(0), Err(Error::InvalidSlot(0))));
        assert!(matches!(ClassifierSlot::from_number(4), Err(Error::InvalidSlot(4))));
    }

    #[test]
    fn test_label() {
        assert_eq!(ClassifierSlot::Two.label(), "分類器2");
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ClassifierSlot::Three).unwrap();
        assert_eq!(json, "3");

        let slot: ClassifierSlot = serde_json::from_str("1").unwrap();
        assert_eq!(slot, ClassifierSlot::One);

        assert!(serde_json::from_str::<ClassifierSlot>("7").is_err());
    }
}
