//! 糊盒時間計算

use press_core::{
    BottomPastingInput, JobBreakdown, PastingInput, PastingRates, PastingSubType, RateConfig,
    SidePastingInput, SidePastingType,
};
use rust_decimal::Decimal;

use crate::production::ProductionTime;
use crate::{non_negative_count, ComputedJob};

/// 糊盒計算器
pub struct PastingCalculator;

impl PastingCalculator {
    /// 依子類型計算糊盒工單
    pub fn calculate(rates: &PastingRates, input: &PastingInput) -> ComputedJob {
        match input {
            PastingInput::Side(side) => Self::calculate_side(rates, side),
            PastingInput::Bottom(bottom) => Self::calculate_bottom(rates, bottom),
        }
    }

    /// 側糊：MR = 尺寸時間 + B 轉 S；產量依盒型與尺寸區間查表
    pub fn calculate_side(rates: &PastingRates, input: &SidePastingInput) -> ComputedJob {
        let breakdown = JobBreakdown::Pasting {
            sub_type: PastingSubType::Side,
            size_range_time: rates.side_size_times.get_or_zero(input.size_range.as_deref()),
            b_to_s_time: Self::b_to_s_time(input.b_to_s, rates.side_b_to_s_time),
        };

        let rate = match (input.size_range.as_deref(), input.quantity_band.as_deref()) {
            (Some(_), Some(band)) => input
                .pasting_type
                .and_then(|pasting_type| Self::side_rate(rates, pasting_type, band)),
            _ => None,
        };

        ComputedJob::new(
            breakdown,
            ProductionTime::at_hourly_rate(input.quantity, rate),
            non_negative_count(input.quantity),
        )
    }

    /// 底糊：沒有盒型維度
    pub fn calculate_bottom(rates: &PastingRates, input: &BottomPastingInput) -> ComputedJob {
        let breakdown = JobBreakdown::Pasting {
            sub_type: PastingSubType::Bottom,
            size_range_time: rates.bottom_size_times.get_or_zero(input.size_range.as_deref()),
            b_to_s_time: Self::b_to_s_time(input.b_to_s, rates.bottom_b_to_s_time),
        };

        let rate = match (input.size_range.as_deref(), input.quantity_band.as_deref()) {
            (Some(_), Some(band)) => rates.bottom_rates.get(band),
            _ => None,
        };

        ComputedJob::new(
            breakdown,
            ProductionTime::at_hourly_rate(input.quantity, rate),
            non_negative_count(input.quantity),
        )
    }

    /// 側糊每小時產量
    pub fn side_rate(rates: &PastingRates, pasting_type: SidePastingType, band: &str) -> Option<Decimal> {
        match pasting_type {
            SidePastingType::Box => rates.side_box_rates.get(band),
            SidePastingType::Parcel => rates.side_parcel_rates.get(band),
        }
    }

    fn b_to_s_time(enabled: bool, minutes: Decimal) -> Decimal {
        if enabled {
            minutes
        } else {
            Decimal::ZERO
        }
    }
}

/// 計算糊盒工單（使用完整配置）
pub fn compute_pasting_job(config: &RateConfig, input: &PastingInput) -> ComputedJob {
    PastingCalculator::calculate(&config.pasting, input)
}
