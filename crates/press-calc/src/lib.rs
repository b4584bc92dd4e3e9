//! # Press Calculation Engine
//!
//! 工單時間計算：準備時間（MR）與生產時間

pub mod calculator;
pub mod die_cut;
pub mod offset;
pub mod pasting;
pub mod production;

// Re-export 主要類型
pub use calculator::JobCalculator;
pub use die_cut::{compute_die_cut_job, DieCutCalculator};
pub use offset::{compute_offset_job, OffsetCalculator};
pub use pasting::{compute_pasting_job, PastingCalculator};
pub use production::ProductionTime;

use press_core::{Job, JobBreakdown, JobTimes};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單筆工單計算結果（尚未命名、未分配ID）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedJob {
    /// MR 明細
    pub breakdown: JobBreakdown,

    /// 時間
    pub times: JobTimes,
}

impl ComputedJob {
    /// 由明細與生產時間組成結果，MR 合計取自明細
    pub fn new(breakdown: JobBreakdown, production_time: Decimal, sheet_count: u64) -> Self {
        let times = JobTimes::new(breakdown.total_mr(), production_time, sheet_count);
        Self { breakdown, times }
    }

    /// 轉為排班工單
    pub fn into_job(self, name: String) -> Job {
        Job::new(
            name,
            self.breakdown,
            self.times.production_time(),
            self.times.sheet_count(),
        )
    }
}

/// 將輸入數量轉為非負張數
pub(crate) fn non_negative_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
