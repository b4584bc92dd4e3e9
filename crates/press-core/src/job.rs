//! 工單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 工單類型（每種類型對應一個排班分頁）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    /// 平版印刷
    Offset,
    /// 模切
    DieCut,
    /// 糊盒
    Pasting,
}

impl JobType {
    /// 所有工單類型（分頁順序）
    pub const ALL: [JobType; 3] = [JobType::Offset, JobType::DieCut, JobType::Pasting];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Offset => "offset",
            JobType::DieCut => "die-cut",
            JobType::Pasting => "pasting",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 糊盒子類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PastingSubType {
    /// 側糊
    Side,
    /// 底糊
    Bottom,
}

/// 準備時間（MR）明細，依工單類型區分欄位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "job_type", rename_all = "kebab-case")]
pub enum JobBreakdown {
    Offset {
        /// 上版時間
        plate_setup_time: Decimal,
        /// 光油橡皮布時間
        varnish_blanket_time: Decimal,
        /// 洗色時間
        color_wash_time: Decimal,
    },
    DieCut {
        /// 新版準備時間
        new_mr_time: Decimal,
        /// 壓凸時間
        emboss_time: Decimal,
        /// 重複版準備時間
        repeated_mr_time: Decimal,
        /// 試切紙時間
        mr_sheets_time: Decimal,
        /// 清廢時間
        striping_time: Decimal,
    },
    Pasting {
        sub_type: PastingSubType,
        /// 尺寸區間準備時間
        size_range_time: Decimal,
        /// B 糊轉 S 糊加時
        b_to_s_time: Decimal,
    },
}

impl JobBreakdown {
    /// 工單類型
    pub fn job_type(&self) -> JobType {
        match self {
            JobBreakdown::Offset { .. } => JobType::Offset,
            JobBreakdown::DieCut { .. } => JobType::DieCut,
            JobBreakdown::Pasting { .. } => JobType::Pasting,
        }
    }

    /// 所有 MR 子項之和
    pub fn total_mr(&self) -> Decimal {
        match self {
            JobBreakdown::Offset {
                plate_setup_time,
                varnish_blanket_time,
                color_wash_time,
            } => plate_setup_time + varnish_blanket_time + color_wash_time,
            JobBreakdown::DieCut {
                new_mr_time,
                emboss_time,
                repeated_mr_time,
                mr_sheets_time,
                striping_time,
            } => new_mr_time + emboss_time + repeated_mr_time + mr_sheets_time + striping_time,
            JobBreakdown::Pasting {
                size_range_time,
                b_to_s_time,
                ..
            } => size_range_time + b_to_s_time,
        }
    }
}

/// 工單時間（排班彙總只需要這組欄位）
///
/// 總時間只由 [`JobTimes::new`] 算出，反序列化時同樣重新計算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "JobTimesRecord")]
pub struct JobTimes {
    /// 準備時間合計（分鐘）
    total_mr: Decimal,

    /// 生產時間（分鐘）
    production_time: Decimal,

    /// 工單總時間 = total_mr + production_time
    total_job_time: Decimal,

    /// 張數 / 機台長度 / 糊盒數量
    sheet_count: u64,
}

/// 序列化後的工單時間（忽略存檔中的總時間）
#[derive(Deserialize)]
struct JobTimesRecord {
    total_mr: Decimal,
    production_time: Decimal,
    sheet_count: u64,
}

impl From<JobTimesRecord> for JobTimes {
    fn from(record: JobTimesRecord) -> Self {
        JobTimes::new(record.total_mr, record.production_time, record.sheet_count)
    }
}

impl JobTimes {
    /// 創建工單時間，總時間由兩部分相加
    pub fn new(total_mr: Decimal, production_time: Decimal, sheet_count: u64) -> Self {
        Self {
            total_mr,
            production_time,
            total_job_time: total_mr + production_time,
            sheet_count,
        }
    }

    pub fn total_mr(&self) -> Decimal {
        self.total_mr
    }

    pub fn production_time(&self) -> Decimal {
        self.production_time
    }

    pub fn total_job_time(&self) -> Decimal {
        self.total_job_time
    }

    pub fn sheet_count(&self) -> u64 {
        self.sheet_count
    }

    /// 檢查總時間與子項是否一致
    pub fn is_consistent(&self) -> bool {
        self.total_job_time == self.total_mr + self.production_time
    }
}

/// 已計算的排班工單
///
/// MR 合計一律取自明細，不接受外部指定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "JobRecord")]
pub struct Job {
    /// 工單ID
    pub id: Uuid,

    /// 工單名稱
    pub name: String,

    /// MR 明細
    breakdown: JobBreakdown,

    /// 時間
    times: JobTimes,
}

/// 序列化後的工單（讀回時依明細重算時間）
#[derive(Deserialize)]
struct JobRecord {
    id: Uuid,
    name: String,
    breakdown: JobBreakdown,
    times: JobTimes,
}

impl From<JobRecord> for Job {
    fn from(record: JobRecord) -> Self {
        Job::new(
            record.name,
            record.breakdown,
            record.times.production_time,
            record.times.sheet_count,
        )
        .with_id(record.id)
    }
}

impl Job {
    /// 創建新的工單
    pub fn new(
        name: String,
        breakdown: JobBreakdown,
        production_time: Decimal,
        sheet_count: u64,
    ) -> Self {
        let times = JobTimes::new(breakdown.total_mr(), production_time, sheet_count);
        Self {
            id: Uuid::new_v4(),
            name,
            breakdown,
            times,
        }
    }

    /// 建構器模式：指定工單ID（編輯時保留原ID）
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn job_type(&self) -> JobType {
        self.breakdown.job_type()
    }

    pub fn breakdown(&self) -> &JobBreakdown {
        &self.breakdown
    }

    pub fn times(&self) -> &JobTimes {
        &self.times
    }

    /// 糊盒子類型（非糊盒工單為 None）
    pub fn pasting_sub_type(&self) -> Option<PastingSubType> {
        match &self.breakdown {
            JobBreakdown::Pasting { sub_type, .. } => Some(*sub_type),
            _ => None,
        }
    }

    pub fn total_mr(&self) -> Decimal {
        self.times.total_mr
    }

    pub fn production_time(&self) -> Decimal {
        self.times.production_time
    }

    pub fn total_job_time(&self) -> Decimal {
        self.times.total_job_time
    }

    pub fn sheet_count(&self) -> u64 {
        self.times.sheet_count
    }
}
