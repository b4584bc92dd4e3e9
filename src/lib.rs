//! # Press
//!
//! 印刷車間排班計算：費率表、工單時間、班次彙總

pub use press_calc as calc;
pub use press_shift as shift;
pub use press_core as model;

pub use press_calc::{
    compute_die_cut_job, compute_offset_job, compute_pasting_job, ComputedJob, JobCalculator,
};
pub use press_core::{
    resolve_range, DieCutInput, Job, JobBreakdown, JobInput, JobTimes, JobType, OffsetInput,
    PastingInput, PastingSubType, PressError, RateConfig, RateTable, RateTier, Result,
    ShiftConfig, SidePastingType,
};
pub use press_shift::{
    aggregate_shift, AdmissionPolicy, CapacityState, ShiftMetrics, ShiftPlanner, ShiftState,
};
