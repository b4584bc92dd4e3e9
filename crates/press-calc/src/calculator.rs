//! 工單主計算器

use press_core::{Job, JobInput, PressError, RateConfig};

use crate::die_cut::DieCutCalculator;
use crate::offset::OffsetCalculator;
use crate::pasting::PastingCalculator;
use crate::ComputedJob;

/// 工單計算器
#[derive(Debug, Clone, Default)]
pub struct JobCalculator {
    /// 費率配置
    config: RateConfig,
}

impl JobCalculator {
    /// 創建新的計算器
    pub fn new(config: RateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RateConfig {
        &self.config
    }

    /// 計算工單時間（不檢查名稱，供表單即時預覽）
    pub fn compute(&self, input: &JobInput) -> ComputedJob {
        let computed = match input {
            JobInput::Offset(offset) => OffsetCalculator::calculate(&self.config.offset, offset),
            JobInput::DieCut(die_cut) => DieCutCalculator::calculate(&self.config.die_cut, die_cut),
            JobInput::Pasting(pasting) => {
                PastingCalculator::calculate(&self.config.pasting, pasting)
            }
        };

        tracing::debug!(
            job_type = %input.job_type(),
            total_mr = %computed.times.total_mr(),
            production_time = %computed.times.production_time(),
            total_job_time = %computed.times.total_job_time(),
            "工單時間計算完成"
        );

        computed
    }

    /// 建立排班工單
    ///
    /// 名稱去除前後空白後不可為空，糊盒的必填選項須齊全。
    pub fn build_job(&self, name: &str, input: &JobInput) -> press_core::Result<Job> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PressError::EmptyJobName);
        }
        if !input.is_complete() {
            return Err(PressError::IncompleteInput(input.job_type()));
        }

        Ok(self.compute(input).into_job(name.to_string()))
    }
}
