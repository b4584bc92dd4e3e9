//! 費率表模型與區間解析

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PressError, Result};

/// 費率區間（上下界皆為閉區間）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    /// 顯示標籤（如 "1001-2500"）
    pub label: String,

    /// 下界（含）
    pub min: i64,

    /// 上界（含），None 表示無上限
    pub max: Option<i64>,

    /// 係數（速度或倍率）
    pub coefficient: Decimal,
}

impl RateTier {
    /// 創建有上界的區間
    pub fn bounded(label: impl Into<String>, min: i64, max: i64, coefficient: Decimal) -> Self {
        Self {
            label: label.into(),
            min,
            max: Some(max),
            coefficient,
        }
    }

    /// 創建無上限的區間
    pub fn open_ended(label: impl Into<String>, min: i64, coefficient: Decimal) -> Self {
        Self {
            label: label.into(),
            min,
            max: None,
            coefficient,
        }
    }

    /// 檢查數量是否落在區間內
    pub fn contains(&self, count: i64) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }

    /// 是否為無上限區間
    pub fn is_open_ended(&self) -> bool {
        self.max.is_none()
    }
}

/// 區間費率表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// 表名（用於日誌與錯誤訊息）
    pub name: String,

    /// 依序排列的區間
    pub tiers: Vec<RateTier>,
}

impl RateTable {
    /// 創建新的費率表
    pub fn new(name: impl Into<String>, tiers: Vec<RateTier>) -> Self {
        Self {
            name: name.into(),
            tiers,
        }
    }

    /// 解析數量所屬區間
    pub fn resolve(&self, count: i64) -> Option<&RateTier> {
        resolve_range(self, count)
    }

    /// 解析數量對應的係數
    pub fn coefficient_for(&self, count: i64) -> Option<Decimal> {
        self.resolve(count).map(|tier| tier.coefficient)
    }

    /// 檢查表結構
    ///
    /// 下界必須為正、上界不得小於下界、區間不得重疊，
    /// 且無上限區間只能出現在最後。
    pub fn validate(&self) -> Result<()> {
        let mut previous_max: Option<i64> = None;

        for (index, tier) in self.tiers.iter().enumerate() {
            if tier.min <= 0 {
                return Err(PressError::InvalidRateTable(format!(
                    "{}: 區間 {} 的下界必須大於 0",
                    self.name, tier.label
                )));
            }

            if let Some(max) = tier.max {
                if max < tier.min {
                    return Err(PressError::InvalidRateTable(format!(
                        "{}: 區間 {} 的上界小於下界",
                        self.name, tier.label
                    )));
                }
            } else if index + 1 != self.tiers.len() {
                return Err(PressError::InvalidRateTable(format!(
                    "{}: 無上限區間 {} 必須是最後一個區間",
                    self.name, tier.label
                )));
            }

            if let Some(prev) = previous_max {
                if tier.min <= prev {
                    return Err(PressError::InvalidRateTable(format!(
                        "{}: 區間 {} 與前一區間重疊",
                        self.name, tier.label
                    )));
                }
            }

            previous_max = tier.max;
        }

        Ok(())
    }
}

/// 線性掃描，回傳第一個包含該數量的區間
///
/// 區間之間的空隙、0 與負數都回傳 None。
pub fn resolve_range(table: &RateTable, count: i64) -> Option<&RateTier> {
    table.tiers.iter().find(|tier| tier.contains(count))
}

/// 以鍵值選取的費率項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedRate {
    /// 選項鍵（如 "1-3-unit"、"400-600"）
    pub key: String,

    /// 顯示標籤
    pub label: String,

    /// 對應值（分鐘或每小時產量）
    pub value: Decimal,
}

impl KeyedRate {
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: Decimal) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value,
        }
    }
}

/// 鍵值費率表
///
/// 查找為精確比對，不做任何鍵名正規化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedRates {
    pub name: String,
    pub entries: Vec<KeyedRate>,
}

impl KeyedRates {
    /// 創建新的鍵值表
    pub fn new(name: impl Into<String>, entries: Vec<KeyedRate>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// 依鍵查找
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value)
    }

    /// 查找，找不到時回傳 0
    pub fn get_or_zero(&self, key: Option<&str>) -> Decimal {
        key.and_then(|k| self.get(k)).unwrap_or(Decimal::ZERO)
    }
}
