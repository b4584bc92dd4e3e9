//! # Press Core
//!
//! 核心資料模型：費率表、配置、工單輸入與工單

pub mod config;
pub mod input;
pub mod job;
pub mod rate_table;

// Re-export 主要類型
pub use config::{DieCutRates, OffsetRates, PastingRates, RateConfig, ShiftConfig};
pub use input::{
    BottomPastingInput, DieCutInput, JobInput, OffsetInput, PastingInput, SidePastingInput,
    SidePastingType,
};
pub use job::{Job, JobBreakdown, JobTimes, JobType, PastingSubType};
pub use rate_table::{resolve_range, KeyedRate, KeyedRates, RateTable, RateTier};

use rust_decimal::Decimal;
use uuid::Uuid;

/// 排班錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PressError {
    #[error("工單名稱不可為空")]
    EmptyJobName,

    #[error("工單時間 {job_time} 分鐘超過剩餘班次時間 {remaining} 分鐘")]
    ExceedsRemainingTime { job_time: Decimal, remaining: Decimal },

    #[error("{0} 工單必填選項未填寫")]
    IncompleteInput(JobType),

    #[error("工單類型不符: 班次為 {expected}，輸入為 {actual}")]
    JobTypeMismatch { expected: JobType, actual: JobType },

    #[error("找不到工單: {0}")]
    JobNotFound(Uuid),

    #[error("費率表無效: {0}")]
    InvalidRateTable(String),

    #[error("配置解析錯誤: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PressError>;
