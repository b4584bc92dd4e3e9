//! 工單輸入參數
//!
//! 可選項目一律以 `Option` 或 `bool` 表示，未勾選即不計時。

use serde::{Deserialize, Serialize};

use crate::job::{JobType, PastingSubType};

/// 平版印刷輸入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OffsetInput {
    /// 印版數
    pub plates: u32,

    /// 是否使用光油橡皮布
    pub varnish_blanket: bool,

    /// 洗色等級鍵（"1-unit"、"1-3-unit"、"1-6-unit"）
    pub color_wash: Option<String>,

    /// 印張數
    pub sheet_count: i64,
}

impl OffsetInput {
    pub fn new(plates: u32, sheet_count: i64) -> Self {
        Self {
            plates,
            sheet_count,
            ..Default::default()
        }
    }

    /// 建構器模式：啟用光油橡皮布
    pub fn with_varnish_blanket(mut self, enabled: bool) -> Self {
        self.varnish_blanket = enabled;
        self
    }

    /// 建構器模式：設置洗色等級
    pub fn with_color_wash(mut self, tier: impl Into<String>) -> Self {
        self.color_wash = Some(tier.into());
        self
    }
}

/// 模切輸入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DieCutInput {
    /// 新版模數（None 表示未勾選）
    pub new_mr_ups: Option<u32>,

    /// 壓凸模數（None 表示未勾選）
    pub emboss_ups: Option<u32>,

    /// 重複版
    pub repeated_mr: bool,

    /// 試切紙
    pub mr_sheets: bool,

    /// 清廢數
    pub striping_count: Option<i64>,

    /// 機台長度（張數）
    pub run_length: i64,
}

impl DieCutInput {
    pub fn new(run_length: i64) -> Self {
        Self {
            run_length,
            ..Default::default()
        }
    }

    pub fn with_new_mr(mut self, ups: u32) -> Self {
        self.new_mr_ups = Some(ups);
        self
    }

    pub fn with_emboss(mut self, ups: u32) -> Self {
        self.emboss_ups = Some(ups);
        self
    }

    pub fn with_repeated_mr(mut self, enabled: bool) -> Self {
        self.repeated_mr = enabled;
        self
    }

    pub fn with_mr_sheets(mut self, enabled: bool) -> Self {
        self.mr_sheets = enabled;
        self
    }

    pub fn with_striping(mut self, count: i64) -> Self {
        self.striping_count = Some(count);
        self
    }
}

/// 側糊盒型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SidePastingType {
    /// 彩盒
    Box,
    /// 包裹箱
    Parcel,
}

/// 側糊輸入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidePastingInput {
    /// 準備時間尺寸區間鍵
    pub size_range: Option<String>,

    /// B 糊轉 S 糊
    pub b_to_s: bool,

    /// 盒型
    pub pasting_type: Option<SidePastingType>,

    /// 產量尺寸區間鍵
    pub quantity_band: Option<String>,

    /// 數量
    pub quantity: i64,
}

/// 底糊輸入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottomPastingInput {
    pub size_range: Option<String>,
    pub b_to_s: bool,
    pub quantity_band: Option<String>,
    pub quantity: i64,
}

/// 糊盒輸入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sub_type", rename_all = "kebab-case")]
pub enum PastingInput {
    Side(SidePastingInput),
    Bottom(BottomPastingInput),
}

impl PastingInput {
    /// 創建側糊輸入
    pub fn side(
        size_range: impl Into<String>,
        pasting_type: SidePastingType,
        quantity_band: impl Into<String>,
        quantity: i64,
    ) -> Self {
        PastingInput::Side(SidePastingInput {
            size_range: Some(size_range.into()),
            b_to_s: false,
            pasting_type: Some(pasting_type),
            quantity_band: Some(quantity_band.into()),
            quantity,
        })
    }

    /// 創建底糊輸入
    pub fn bottom(size_range: impl Into<String>, quantity_band: impl Into<String>, quantity: i64) -> Self {
        PastingInput::Bottom(BottomPastingInput {
            size_range: Some(size_range.into()),
            b_to_s: false,
            quantity_band: Some(quantity_band.into()),
            quantity,
        })
    }

    /// 建構器模式：B 糊轉 S 糊
    pub fn with_b_to_s(mut self, enabled: bool) -> Self {
        match &mut self {
            PastingInput::Side(side) => side.b_to_s = enabled,
            PastingInput::Bottom(bottom) => bottom.b_to_s = enabled,
        }
        self
    }

    pub fn sub_type(&self) -> PastingSubType {
        match self {
            PastingInput::Side(_) => PastingSubType::Side,
            PastingInput::Bottom(_) => PastingSubType::Bottom,
        }
    }

    /// 數量（側糊或底糊）
    pub fn quantity(&self) -> i64 {
        match self {
            PastingInput::Side(side) => side.quantity,
            PastingInput::Bottom(bottom) => bottom.quantity,
        }
    }

    /// 必填選項是否齊全
    pub fn is_complete(&self) -> bool {
        match self {
            PastingInput::Side(side) => {
                side.size_range.is_some()
                    && side.pasting_type.is_some()
                    && side.quantity_band.is_some()
                    && side.quantity > 0
            }
            PastingInput::Bottom(bottom) => {
                bottom.size_range.is_some() && bottom.quantity_band.is_some() && bottom.quantity > 0
            }
        }
    }
}

/// 任一類型的工單輸入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "job_type", rename_all = "kebab-case")]
pub enum JobInput {
    Offset(OffsetInput),
    DieCut(DieCutInput),
    Pasting(PastingInput),
}

impl JobInput {
    pub fn job_type(&self) -> JobType {
        match self {
            JobInput::Offset(_) => JobType::Offset,
            JobInput::DieCut(_) => JobType::DieCut,
            JobInput::Pasting(_) => JobType::Pasting,
        }
    }

    /// 必填選項是否齊全（平版與模切只需名稱）
    pub fn is_complete(&self) -> bool {
        match self {
            JobInput::Offset(_) | JobInput::DieCut(_) => true,
            JobInput::Pasting(pasting) => pasting.is_complete(),
        }
    }
}

impl From<OffsetInput> for JobInput {
    fn from(input: OffsetInput) -> Self {
        JobInput::Offset(input)
    }
}

impl From<DieCutInput> for JobInput {
    fn from(input: DieCutInput) -> Self {
        JobInput::DieCut(input)
    }
}

impl From<PastingInput> for JobInput {
    fn from(input: PastingInput) -> Self {
        JobInput::Pasting(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_cut_builder() {
        let input = DieCutInput::new(5000)
            .with_new_mr(12)
            .with_repeated_mr(true)
            .with_striping(41);

        assert_eq!(input.new_mr_ups, Some(12));
        assert_eq!(input.emboss_ups, None);
        assert!(input.repeated_mr);
        assert!(!input.mr_sheets);
        assert_eq!(input.striping_count, Some(41));
    }

    #[test]
    fn test_pasting_completeness() {
        let side = PastingInput::side("less-250", SidePastingType::Box, "400-600", 20_000);
        assert!(side.is_complete());
        assert_eq!(side.sub_type(), PastingSubType::Side);

        let mut missing_type = SidePastingInput {
            size_range: Some("less-250".to_string()),
            quantity_band: Some("400-600".to_string()),
            quantity: 100,
            ..Default::default()
        };
        assert!(!PastingInput::Side(missing_type.clone()).is_complete());

        missing_type.pasting_type = Some(SidePastingType::Parcel);
        missing_type.quantity = 0;
        assert!(!PastingInput::Side(missing_type).is_complete());
    }

    #[test]
    fn test_job_input_completeness() {
        assert!(JobInput::from(OffsetInput::new(0, 0)).is_complete());
        assert!(JobInput::from(DieCutInput::new(0)).is_complete());
        assert!(!JobInput::from(PastingInput::Bottom(BottomPastingInput::default())).is_complete());
        assert!(JobInput::from(PastingInput::bottom("250-400", "250-400", 800)).is_complete());
    }

    #[test]
    fn test_b_to_s_builder() {
        let bottom = PastingInput::bottom("250-400", "250-400", 800).with_b_to_s(true);
        match bottom {
            PastingInput::Bottom(b) => assert!(b.b_to_s),
            PastingInput::Side(_) => panic!("expected bottom pasting"),
        }
    }

    #[test]
    fn test_job_input_from() {
        let input: JobInput = OffsetInput::new(2, 5000).into();
        assert_eq!(input.job_type(), JobType::Offset);
    }
}
