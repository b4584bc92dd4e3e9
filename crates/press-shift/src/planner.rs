//! 排班規劃器
//!
//! 每種工單類型各自持有一份班次狀態，彼此不共享。

use press_calc::{ComputedJob, JobCalculator};
use press_core::{JobInput, JobType, PressError, RateConfig, ShiftConfig};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::ShiftMetrics;
use crate::state::{FitCheck, ShiftState};

/// 超出剩餘時間時的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdmissionPolicy {
    /// 拒絕加入
    Reject,
    /// 照常加入（操作員已確認）
    AllowOverbooking,
}

impl AdmissionPolicy {
    /// 各工單類型的預設處理方式
    ///
    /// 糊盒允許確認後超排，其餘類型直接拒絕。
    pub fn default_for(job_type: JobType) -> Self {
        match job_type {
            JobType::Offset | JobType::DieCut => AdmissionPolicy::Reject,
            JobType::Pasting => AdmissionPolicy::AllowOverbooking,
        }
    }
}

/// 排班規劃器
#[derive(Debug, Clone)]
pub struct ShiftPlanner {
    calculator: JobCalculator,
    offset: ShiftState,
    die_cut: ShiftState,
    pasting: ShiftState,
}

impl ShiftPlanner {
    /// 創建規劃器
    pub fn new(rates: RateConfig, shift_config: &ShiftConfig) -> Self {
        Self {
            calculator: JobCalculator::new(rates),
            offset: ShiftState::from_config(JobType::Offset, shift_config),
            die_cut: ShiftState::from_config(JobType::DieCut, shift_config),
            pasting: ShiftState::from_config(JobType::Pasting, shift_config),
        }
    }

    pub fn calculator(&self) -> &JobCalculator {
        &self.calculator
    }

    /// 取得某類型的班次
    pub fn shift(&self, job_type: JobType) -> &ShiftState {
        match job_type {
            JobType::Offset => &self.offset,
            JobType::DieCut => &self.die_cut,
            JobType::Pasting => &self.pasting,
        }
    }

    fn shift_mut(&mut self, job_type: JobType) -> &mut ShiftState {
        match job_type {
            JobType::Offset => &mut self.offset,
            JobType::DieCut => &mut self.die_cut,
            JobType::Pasting => &mut self.pasting,
        }
    }

    /// 某類型班次的彙總指標
    pub fn metrics(&self, job_type: JobType) -> ShiftMetrics {
        self.shift(job_type).metrics()
    }

    /// 表單即時預覽（不檢查名稱、不加入班次）
    pub fn preview(&self, input: &JobInput) -> ComputedJob {
        self.calculator.compute(input)
    }

    /// 依預設處理方式加入工單
    pub fn add_job(&mut self, name: &str, input: &JobInput) -> press_core::Result<Uuid> {
        let policy = AdmissionPolicy::default_for(input.job_type());
        self.add_job_with_policy(name, input, policy)
    }

    /// 依指定處理方式加入工單
    pub fn add_job_with_policy(
        &mut self,
        name: &str,
        input: &JobInput,
        policy: AdmissionPolicy,
    ) -> press_core::Result<Uuid> {
        let job = self.calculator.build_job(name, input)?;
        let shift = self.shift_mut(input.job_type());

        if let FitCheck::Exceeds { job_time, remaining } = shift.check_fit(&job) {
            match policy {
                AdmissionPolicy::Reject => {
                    return Err(PressError::ExceedsRemainingTime { job_time, remaining });
                }
                AdmissionPolicy::AllowOverbooking => {
                    tracing::warn!(
                        job_type = %input.job_type(),
                        %job_time,
                        %remaining,
                        "工單超出剩餘班次時間，仍加入"
                    );
                }
            }
        }

        Ok(shift.add_job(job))
    }

    /// 重新計算並替換工單（保留ID）
    pub fn edit_job(
        &mut self,
        job_type: JobType,
        id: Uuid,
        name: &str,
        input: &JobInput,
    ) -> press_core::Result<()> {
        if input.job_type() != job_type {
            return Err(PressError::JobTypeMismatch {
                expected: job_type,
                actual: input.job_type(),
            });
        }

        let job = self.calculator.build_job(name, input)?;
        self.shift_mut(job_type).replace_job(id, job)
    }

    /// 移除工單
    pub fn remove_job(&mut self, job_type: JobType, id: Uuid) -> Option<press_core::Job> {
        self.shift_mut(job_type).remove_job(id)
    }

    /// 清空某類型班次
    pub fn clear_shift(&mut self, job_type: JobType) {
        self.shift_mut(job_type).clear();
    }
}

impl Default for ShiftPlanner {
    fn default() -> Self {
        Self::new(RateConfig::default(), &ShiftConfig::default())
    }
}
