//! 費率與排班配置
//!
//! 預設值即車間現行的費率表；表格可由 JSON 整份替換。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::job::JobType;
use crate::rate_table::{KeyedRate, KeyedRates, RateTable, RateTier};
use crate::Result;

/// 班次長度（分鐘）
pub const SHIFT_DURATION_MINUTES: i64 = 660;

/// 平版印刷參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetRates {
    /// 每塊印版上版時間
    pub plate_setup_time_per_plate: Decimal,

    /// 光油橡皮布時間（每塊）
    pub varnish_blanket_time: Decimal,

    /// 洗色等級 → 分鐘
    pub color_wash: KeyedRates,

    /// 印張數 → 每分鐘張數
    pub sheet_speed: RateTable,
}

impl Default for OffsetRates {
    fn default() -> Self {
        Self {
            plate_setup_time_per_plate: Decimal::from(8),
            varnish_blanket_time: Decimal::from(15),
            color_wash: KeyedRates::new(
                "offset-color-wash",
                vec![
                    KeyedRate::new("1-unit", "1 unit", Decimal::from(8)),
                    KeyedRate::new("1-3-unit", "1-3 unit", Decimal::from(15)),
                    KeyedRate::new("1-6-unit", "1-6 unit", Decimal::from(30)),
                ],
            ),
            sheet_speed: RateTable::new(
                "offset-sheet-speed",
                vec![
                    RateTier::bounded("1-1000", 1, 1_000, Decimal::from(16)),
                    RateTier::bounded("1001-2500", 1_001, 2_500, Decimal::from(50)),
                    RateTier::bounded("2501-5000", 2_501, 5_000, Decimal::from(60)),
                    RateTier::bounded("5001-10000", 5_001, 10_000, Decimal::from(75)),
                    RateTier::bounded("10001-50000", 10_001, 50_000, Decimal::from(117)),
                    RateTier::open_ended("50000+", 50_001, Decimal::from(140)),
                ],
            ),
        }
    }
}

/// 模切參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DieCutRates {
    /// 新版基本時間（模數不超過門檻）
    pub new_mr_base_time: Decimal,

    /// 新版門檻模數（含）
    pub new_mr_threshold: u32,

    /// 超過門檻後每模加時
    pub new_mr_time_per_extra_up: Decimal,

    /// 壓凸每模時間
    pub emboss_time_per_up: Decimal,

    /// 重複版時間
    pub repeated_mr_time: Decimal,

    /// 試切紙時間
    pub mr_sheets_time: Decimal,

    /// 清廢數 → 倍率（超出最後區間計 0）
    pub striping: RateTable,

    /// 機台長度 → 每分鐘張數
    pub run_speed: RateTable,
}

impl Default for DieCutRates {
    fn default() -> Self {
        Self {
            new_mr_base_time: Decimal::from(60),
            new_mr_threshold: 10,
            new_mr_time_per_extra_up: Decimal::from(4),
            emboss_time_per_up: Decimal::from(4),
            repeated_mr_time: Decimal::from(30),
            mr_sheets_time: Decimal::from(15),
            striping: RateTable::new(
                "die-cut-striping",
                vec![
                    RateTier::bounded("1-40", 1, 40, Decimal::new(15, 1)),
                    RateTier::bounded("41-90", 41, 90, Decimal::new(115, 2)),
                ],
            ),
            run_speed: RateTable::new(
                "die-cut-run-speed",
                vec![
                    RateTier::bounded("1-2000", 1, 2_000, Decimal::from(50)),
                    RateTier::bounded("2001-4000", 2_001, 4_000, Decimal::from(60)),
                    RateTier::bounded("4001-6000", 4_001, 6_000, Decimal::from(65)),
                    RateTier::bounded("6001-10000", 6_001, 10_000, Decimal::from(70)),
                    RateTier::bounded("10001-49999", 10_001, 49_999, Decimal::from(76)),
                    RateTier::open_ended("50000+", 50_000, Decimal::from(100)),
                ],
            ),
        }
    }
}

/// 糊盒參數（產量以每小時件數表示）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastingRates {
    /// 側糊尺寸 → 準備時間
    pub side_size_times: KeyedRates,

    /// 側糊 B 轉 S 加時
    pub side_b_to_s_time: Decimal,

    /// 側糊彩盒：尺寸區間 → 每小時件數
    pub side_box_rates: KeyedRates,

    /// 側糊包裹箱：尺寸區間 → 每小時件數
    pub side_parcel_rates: KeyedRates,

    /// 底糊尺寸 → 準備時間
    pub bottom_size_times: KeyedRates,

    /// 底糊 B 轉 S 加時
    pub bottom_b_to_s_time: Decimal,

    /// 底糊：尺寸區間 → 每小時件數
    pub bottom_rates: KeyedRates,
}

impl Default for PastingRates {
    fn default() -> Self {
        Self {
            side_size_times: KeyedRates::new(
                "side-pasting-size",
                vec![
                    KeyedRate::new("less-250", "< 250 mm", Decimal::from(30)),
                    KeyedRate::new("250-400", "250-400 mm", Decimal::from(45)),
                    KeyedRate::new("400-600", "400-600 mm", Decimal::from(60)),
                    KeyedRate::new("more-600", "> 600 mm", Decimal::from(75)),
                ],
            ),
            side_b_to_s_time: Decimal::from(45),
            side_box_rates: KeyedRates::new(
                "side-pasting-box",
                vec![
                    KeyedRate::new("less-250", "< 250 mm", Decimal::from(30_000)),
                    KeyedRate::new("250-400", "250-400 mm", Decimal::from(25_000)),
                    KeyedRate::new("400-600", "400-600 mm", Decimal::from(20_000)),
                    KeyedRate::new("more-600", "> 600 mm", Decimal::from(15_000)),
                ],
            ),
            // 最小區間鍵與尺寸選項統一為 "less-250"
            side_parcel_rates: KeyedRates::new(
                "side-pasting-parcel",
                vec![
                    KeyedRate::new("less-250", "< 250 mm", Decimal::from(20_000)),
                    KeyedRate::new("250-400", "250-400 mm", Decimal::from(16_000)),
                    KeyedRate::new("400-600", "400-600 mm", Decimal::from(12_000)),
                    KeyedRate::new("more-600", "> 600 mm", Decimal::from(9_000)),
                ],
            ),
            bottom_size_times: KeyedRates::new(
                "bottom-pasting-size",
                vec![
                    KeyedRate::new("less-250", "< 250 mm", Decimal::from(45)),
                    KeyedRate::new("250-400", "250-400 mm", Decimal::from(60)),
                    KeyedRate::new("more-400", "> 400 mm", Decimal::from(90)),
                ],
            ),
            bottom_b_to_s_time: Decimal::from(45),
            bottom_rates: KeyedRates::new(
                "bottom-pasting",
                vec![
                    KeyedRate::new("less-250", "< 250 mm", Decimal::from(12_000)),
                    KeyedRate::new("250-400", "250-400 mm", Decimal::from(10_000)),
                    KeyedRate::new("more-400", "> 400 mm", Decimal::from(8_000)),
                ],
            ),
        }
    }
}

/// 全部費率配置（啟動時載入，執行期間不變）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    pub offset: OffsetRates,
    pub die_cut: DieCutRates,
    pub pasting: PastingRates,
}

impl RateConfig {
    /// 從 JSON 載入並檢查區間表
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RateConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 輸出為 JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 檢查所有區間表
    pub fn validate(&self) -> Result<()> {
        self.offset.sheet_speed.validate()?;
        self.die_cut.striping.validate()?;
        self.die_cut.run_speed.validate()?;
        Ok(())
    }

    /// 建構器模式：替換清廢倍率表
    pub fn with_striping_table(mut self, table: RateTable) -> Self {
        self.die_cut.striping = table;
        self
    }

    /// 建構器模式：替換印張速度表
    pub fn with_sheet_speed_table(mut self, table: RateTable) -> Self {
        self.offset.sheet_speed = table;
        self
    }

    /// 建構器模式：替換模切速度表
    pub fn with_run_speed_table(mut self, table: RateTable) -> Self {
        self.die_cut.run_speed = table;
        self
    }

    /// 建構器模式：替換糊盒參數
    pub fn with_pasting_rates(mut self, rates: PastingRates) -> Self {
        self.pasting = rates;
        self
    }
}

/// 排班配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// 班次長度（分鐘）
    pub shift_duration: Decimal,

    /// 平版印刷每班準備時間
    pub offset_setup_time: Decimal,

    /// 模切每班準備時間
    pub die_cut_setup_time: Decimal,

    /// 糊盒每班準備時間
    pub pasting_setup_time: Decimal,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            shift_duration: Decimal::from(SHIFT_DURATION_MINUTES),
            offset_setup_time: Decimal::from(20),
            die_cut_setup_time: Decimal::from(15),
            pasting_setup_time: Decimal::from(15),
        }
    }
}

impl ShiftConfig {
    /// 從 JSON 載入
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 取得工單類型的每班準備時間
    pub fn setup_time_for(&self, job_type: JobType) -> Decimal {
        match job_type {
            JobType::Offset => self.offset_setup_time,
            JobType::DieCut => self.die_cut_setup_time,
            JobType::Pasting => self.pasting_setup_time,
        }
    }

    /// 建構器模式：設置班次長度
    pub fn with_shift_duration(mut self, minutes: Decimal) -> Self {
        self.shift_duration = minutes;
        self
    }

    /// 建構器模式：設置某類型的準備時間
    pub fn with_setup_time(mut self, job_type: JobType, minutes: Decimal) -> Self {
        match job_type {
            JobType::Offset => self.offset_setup_time = minutes,
            JobType::DieCut => self.die_cut_setup_time = minutes,
            JobType::Pasting => self.pasting_setup_time = minutes,
        }
        self
    }
}
