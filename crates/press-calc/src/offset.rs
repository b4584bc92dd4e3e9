//! 平版印刷時間計算

use press_core::{JobBreakdown, OffsetInput, OffsetRates, RateConfig};
use rust_decimal::Decimal;

use crate::production::ProductionTime;
use crate::{non_negative_count, ComputedJob};

/// 平版印刷計算器
pub struct OffsetCalculator;

impl OffsetCalculator {
    /// 計算平版印刷工單
    ///
    /// MR = 印版數 × 每版時間 + 光油橡皮布 + 洗色；
    /// 生產時間 = 印張數 ÷ 區間速度。
    pub fn calculate(rates: &OffsetRates, input: &OffsetInput) -> ComputedJob {
        let breakdown = JobBreakdown::Offset {
            plate_setup_time: Self::plate_setup_time(rates, input.plates),
            varnish_blanket_time: Self::varnish_blanket_time(rates, input.varnish_blanket),
            color_wash_time: Self::color_wash_time(rates, input.color_wash.as_deref()),
        };

        let production_time = Self::production_time(rates, input.sheet_count);

        ComputedJob::new(
            breakdown,
            production_time,
            non_negative_count(input.sheet_count),
        )
    }

    /// 上版時間
    pub fn plate_setup_time(rates: &OffsetRates, plates: u32) -> Decimal {
        Decimal::from(plates) * rates.plate_setup_time_per_plate
    }

    /// 光油橡皮布時間（固定一塊）
    pub fn varnish_blanket_time(rates: &OffsetRates, enabled: bool) -> Decimal {
        if enabled {
            rates.varnish_blanket_time
        } else {
            Decimal::ZERO
        }
    }

    /// 洗色時間，未選或未知等級為 0
    pub fn color_wash_time(rates: &OffsetRates, tier: Option<&str>) -> Decimal {
        rates.color_wash.get_or_zero(tier)
    }

    /// 生產時間
    pub fn production_time(rates: &OffsetRates, sheet_count: i64) -> Decimal {
        ProductionTime::at_tiered_speed(sheet_count, &rates.sheet_speed)
    }
}

/// 計算平版印刷工單（使用完整配置）
pub fn compute_offset_job(config: &RateConfig, input: &OffsetInput) -> ComputedJob {
    OffsetCalculator::calculate(&config.offset, input)
}
