//! 班次狀態（每種工單類型一份）

use press_core::{Job, JobType, PressError, ShiftConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::{aggregate_shift, ShiftMetrics};

/// 工單是否放得進剩餘時間
#[derive(Debug, Clone, PartialEq)]
pub enum FitCheck {
    Fits,
    Exceeds { job_time: Decimal, remaining: Decimal },
}

impl FitCheck {
    pub fn fits(&self) -> bool {
        matches!(self, FitCheck::Fits)
    }
}

/// 班次狀態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftState {
    /// 工單類型
    job_type: JobType,

    /// 每班準備時間
    setup_time: Decimal,

    /// 班次長度
    shift_duration: Decimal,

    /// 工單（插入順序即顯示順序）
    jobs: Vec<Job>,
}

impl ShiftState {
    /// 創建空的班次
    pub fn new(job_type: JobType, setup_time: Decimal, shift_duration: Decimal) -> Self {
        Self {
            job_type,
            setup_time,
            shift_duration,
            jobs: Vec::new(),
        }
    }

    /// 依排班配置創建
    pub fn from_config(job_type: JobType, config: &ShiftConfig) -> Self {
        Self::new(job_type, config.setup_time_for(job_type), config.shift_duration)
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    pub fn setup_time(&self) -> Decimal {
        self.setup_time
    }

    pub fn shift_duration(&self) -> Decimal {
        self.shift_duration
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// 依ID查找工單
    pub fn get(&self, id: Uuid) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// 工單時間合計
    pub fn total_jobs_time(&self) -> Decimal {
        self.jobs.iter().map(|job| job.total_job_time()).sum()
    }

    /// 剩餘時間 = 班次長度 - 準備時間 - 工單時間（可為負）
    pub fn remaining_time(&self) -> Decimal {
        self.shift_duration - self.setup_time - self.total_jobs_time()
    }

    /// 彙總指標
    pub fn metrics(&self) -> ShiftMetrics {
        aggregate_shift(&self.jobs, self.setup_time, self.shift_duration)
    }

    /// 檢查工單是否放得進剩餘時間
    pub fn check_fit(&self, job: &Job) -> FitCheck {
        let remaining = self.remaining_time();
        if job.total_job_time() > remaining {
            FitCheck::Exceeds {
                job_time: job.total_job_time(),
                remaining,
            }
        } else {
            FitCheck::Fits
        }
    }

    /// 加入工單（附加在最後）
    pub fn add_job(&mut self, job: Job) -> Uuid {
        let id = job.id;
        tracing::info!(job_type = %self.job_type, %id, name = %job.name, "加入工單");
        self.jobs.push(job);
        id
    }

    /// 移除工單
    pub fn remove_job(&mut self, id: Uuid) -> Option<Job> {
        let index = self.jobs.iter().position(|job| job.id == id)?;
        tracing::info!(job_type = %self.job_type, %id, "移除工單");
        Some(self.jobs.remove(index))
    }

    /// 以新內容替換工單，保留原ID與位置
    pub fn replace_job(&mut self, id: Uuid, job: Job) -> press_core::Result<()> {
        let slot = self
            .jobs
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(PressError::JobNotFound(id))?;

        *slot = job.with_id(id);
        tracing::info!(job_type = %self.job_type, %id, "更新工單");
        Ok(())
    }

    /// 清空班次
    pub fn clear(&mut self) {
        tracing::info!(job_type = %self.job_type, count = self.jobs.len(), "清空班次");
        self.jobs.clear();
    }
}
