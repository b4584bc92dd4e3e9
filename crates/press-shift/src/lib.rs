//! # Press Shift
//!
//! 班次狀態、時間彙總與排班規劃

pub mod aggregate;
pub mod planner;
pub mod state;

// Re-export 主要類型
pub use aggregate::{
    aggregate_shift, CapacityState, ShiftMetrics, ShiftWarning, WarningSeverity,
    NEAR_FULL_THRESHOLD_MINUTES,
};
pub use planner::{AdmissionPolicy, ShiftPlanner};
pub use state::{FitCheck, ShiftState};
