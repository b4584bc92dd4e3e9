//! 模切時間計算

use press_core::{DieCutInput, DieCutRates, JobBreakdown, RateConfig};
use rust_decimal::Decimal;

use crate::production::ProductionTime;
use crate::{non_negative_count, ComputedJob};

/// 模切計算器
pub struct DieCutCalculator;

impl DieCutCalculator {
    /// 計算模切工單
    ///
    /// MR 由五個獨立項目相加：新版、壓凸、重複版、試切紙、清廢。
    pub fn calculate(rates: &DieCutRates, input: &DieCutInput) -> ComputedJob {
        let breakdown = JobBreakdown::DieCut {
            new_mr_time: input
                .new_mr_ups
                .map(|ups| Self::new_mr_time(rates, ups))
                .unwrap_or(Decimal::ZERO),
            emboss_time: input
                .emboss_ups
                .map(|ups| Self::emboss_time(rates, ups))
                .unwrap_or(Decimal::ZERO),
            repeated_mr_time: Self::flag_time(input.repeated_mr, rates.repeated_mr_time),
            mr_sheets_time: Self::flag_time(input.mr_sheets, rates.mr_sheets_time),
            striping_time: input
                .striping_count
                .map(|count| Self::striping_time(rates, count))
                .unwrap_or(Decimal::ZERO),
        };

        let production_time = Self::production_time(rates, input.run_length);

        ComputedJob::new(
            breakdown,
            production_time,
            non_negative_count(input.run_length),
        )
    }

    /// 新版準備時間
    ///
    /// 模數不超過門檻（含）時為基本時間，否則每多一模加時。
    pub fn new_mr_time(rates: &DieCutRates, ups: u32) -> Decimal {
        if ups <= rates.new_mr_threshold {
            return rates.new_mr_base_time;
        }
        let extra_ups = ups - rates.new_mr_threshold;
        rates.new_mr_base_time + Decimal::from(extra_ups) * rates.new_mr_time_per_extra_up
    }

    /// 壓凸時間
    pub fn emboss_time(rates: &DieCutRates, ups: u32) -> Decimal {
        Decimal::from(ups) * rates.emboss_time_per_up
    }

    /// 清廢時間
    ///
    /// 超出倍率表最後區間時為 0，不套用最後區間的倍率。
    pub fn striping_time(rates: &DieCutRates, count: i64) -> Decimal {
        match rates.striping.coefficient_for(count) {
            Some(multiplier) => Decimal::from(count) * multiplier,
            None => Decimal::ZERO,
        }
    }

    /// 生產時間
    pub fn production_time(rates: &DieCutRates, run_length: i64) -> Decimal {
        ProductionTime::at_tiered_speed(run_length, &rates.run_speed)
    }

    fn flag_time(enabled: bool, minutes: Decimal) -> Decimal {
        if enabled {
            minutes
        } else {
            Decimal::ZERO
        }
    }
}

/// 計算模切工單（使用完整配置）
pub fn compute_die_cut_job(config: &RateConfig, input: &DieCutInput) -> ComputedJob {
    DieCutCalculator::calculate(&config.die_cut, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use press_core::{RateTable, RateTier};
    use rstest::rstest;

    fn rates() -> DieCutRates {
        DieCutRates::default()
    }

    #[rstest]
    #[case(1, 60)]
    #[case(10, 60)]
    #[case(11, 64)]
    #[case(15, 80)]
    fn test_new_mr_threshold(#[case] ups: u32, #[case] minutes: i64) {
        assert_eq!(
            DieCutCalculator::new_mr_time(&rates(), ups),
            Decimal::from(minutes)
        );
    }

    #[test]
    fn test_emboss_time() {
        assert_eq!(DieCutCalculator::emboss_time(&rates(), 6), Decimal::from(24));
    }

    #[test]
    fn test_striping_tiers() {
        let rates = rates();

        assert_eq!(DieCutCalculator::striping_time(&rates, 1), Decimal::new(15, 1));
        assert_eq!(DieCutCalculator::striping_time(&rates, 40), Decimal::from(60));
        assert_eq!(DieCutCalculator::striping_time(&rates, 41), Decimal::new(4715, 2));
        assert_eq!(DieCutCalculator::striping_time(&rates, 90), Decimal::new(1035, 1));
    }

    #[test]
    fn test_striping_out_of_range_is_zero() {
        let rates = rates();

        // 超出最後區間不沿用 ×1.15
        assert_eq!(DieCutCalculator::striping_time(&rates, 91), Decimal::ZERO);
        assert_eq!(DieCutCalculator::striping_time(&rates, 500), Decimal::ZERO);
        assert_eq!(DieCutCalculator::striping_time(&rates, 0), Decimal::ZERO);
        assert_eq!(DieCutCalculator::striping_time(&rates, -3), Decimal::ZERO);
    }

    #[test]
    fn test_striping_with_narrower_table() {
        let mut rates = rates();
        rates.striping = RateTable::new(
            "die-cut-striping",
            vec![
                RateTier::bounded("1-40", 1, 40, Decimal::new(15, 1)),
                RateTier::bounded("41-80", 41, 80, Decimal::new(115, 2)),
            ],
        );

        assert_eq!(DieCutCalculator::striping_time(&rates, 85), Decimal::ZERO);
        assert_eq!(DieCutCalculator::striping_time(&rates, 80), Decimal::from(92));
    }

    #[rstest]
    #[case(1, 50)]
    #[case(2_000, 50)]
    #[case(2_001, 60)]
    #[case(4_000, 60)]
    #[case(4_001, 65)]
    #[case(6_000, 65)]
    #[case(6_001, 70)]
    #[case(10_000, 70)]
    #[case(10_001, 76)]
    #[case(49_999, 76)]
    #[case(50_000, 100)]
    #[case(250_000, 100)]
    fn test_run_speed_bounds(#[case] run_length: i64, #[case] speed: i64) {
        assert_eq!(
            rates().run_speed.coefficient_for(run_length),
            Some(Decimal::from(speed))
        );
    }

    #[test]
    fn test_full_die_cut_job() {
        let input = DieCutInput::new(3_000)
            .with_new_mr(12)
            .with_emboss(2)
            .with_repeated_mr(true)
            .with_mr_sheets(true)
            .with_striping(41);

        let job = DieCutCalculator::calculate(&rates(), &input);

        // 68 + 8 + 30 + 15 + 47.15
        assert_eq!(job.times.total_mr(), Decimal::new(16815, 2));
        assert_eq!(job.times.production_time(), Decimal::from(50));
        assert_eq!(job.times.total_job_time(), Decimal::new(21815, 2));
        assert_eq!(job.times.sheet_count(), 3_000);
    }

    #[test]
    fn test_unchecked_terms_contribute_nothing() {
        let job = DieCutCalculator::calculate(&rates(), &DieCutInput::new(0));

        assert_eq!(job.times.total_mr(), Decimal::ZERO);
        assert_eq!(job.times.production_time(), Decimal::ZERO);
        assert_eq!(job.times.total_job_time(), Decimal::ZERO);
    }

    #[test]
    fn test_mr_sheets_kept_in_breakdown() {
        let job = DieCutCalculator::calculate(&rates(), &DieCutInput::new(0).with_mr_sheets(true));

        match job.breakdown {
            JobBreakdown::DieCut { mr_sheets_time, .. } => {
                assert_eq!(mr_sheets_time, Decimal::from(15));
            }
            other => panic!("unexpected breakdown: {:?}", other),
        }
        assert_eq!(job.times.total_mr(), Decimal::from(15));
    }

    #[test]
    fn test_compute_die_cut_job_uses_config() {
        let config = RateConfig::default();
        let job = compute_die_cut_job(&config, &DieCutInput::new(50_000).with_new_mr(10));

        assert_eq!(job.times.total_job_time(), Decimal::from(560));
    }
}
