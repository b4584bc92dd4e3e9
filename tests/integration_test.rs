//! 集成測試

use press::*;
use rstest::rstest;
use rust_decimal::Decimal;

#[test]
fn test_offset_job_into_shift() {
    // 場景：2 塊印版、光油橡皮布、1-3 unit 洗色、5000 張
    let config = RateConfig::default();
    let input = OffsetInput::new(2, 5_000)
        .with_varnish_blanket(true)
        .with_color_wash("1-3-unit");

    let computed = compute_offset_job(&config, &input);
    assert_eq!(computed.times.total_mr(), Decimal::from(46));
    assert_eq!(computed.times.production_time().round_dp(2), Decimal::new(8333, 2));
    assert_eq!(computed.times.total_job_time().round_dp(2), Decimal::new(12933, 2));

    let shift_config = ShiftConfig::default();
    let mut shift = ShiftState::from_config(JobType::Offset, &shift_config);
    shift.add_job(computed.into_job("CARTON-01".to_string()));

    let metrics = shift.metrics();
    // 660 - 20 - 129.33...
    assert_eq!(metrics.remaining_shift_time.round_dp(2), Decimal::new(51067, 2));
    assert_eq!(metrics.capacity_state, CapacityState::Available);
    assert_eq!(metrics.total_sheets, 5_000);
}

#[test]
fn test_die_cut_reference_values() {
    let rates = RateConfig::default();

    assert_eq!(
        press::calc::DieCutCalculator::new_mr_time(&rates.die_cut, 10),
        Decimal::from(60)
    );
    assert_eq!(
        press::calc::DieCutCalculator::new_mr_time(&rates.die_cut, 11),
        Decimal::from(64)
    );
    assert_eq!(
        press::calc::DieCutCalculator::new_mr_time(&rates.die_cut, 1),
        Decimal::from(60)
    );
    assert_eq!(
        press::calc::DieCutCalculator::striping_time(&rates.die_cut, 40),
        Decimal::from(60)
    );
    assert_eq!(
        press::calc::DieCutCalculator::striping_time(&rates.die_cut, 41),
        Decimal::new(4715, 2)
    );
    // 超出清廢倍率表：計 0，不沿用最後區間
    assert_eq!(
        press::calc::DieCutCalculator::striping_time(&rates.die_cut, 91),
        Decimal::ZERO
    );
}

#[test]
fn test_side_pasting_reference_value() {
    let config = RateConfig::default();
    let input = PastingInput::side("less-250", SidePastingType::Box, "400-600", 20_000);

    let computed = compute_pasting_job(&config, &input);

    assert_eq!(computed.times.production_time(), Decimal::from(60));
}

fn job_with_total(name: &str, minutes: i64) -> Job {
    Job::new(
        name.to_string(),
        JobBreakdown::Offset {
            plate_setup_time: Decimal::ZERO,
            varnish_blanket_time: Decimal::ZERO,
            color_wash_time: Decimal::ZERO,
        },
        Decimal::from(minutes),
        0,
    )
}

#[rstest]
#[case(500, 140, CapacityState::Available)]
#[case(610, 30, CapacityState::NearFull)]
#[case(700, -60, CapacityState::Over)]
fn test_aggregate_reference_values(
    #[case] jobs_time: i64,
    #[case] remaining: i64,
    #[case] state: CapacityState,
) {
    let jobs = vec![
        job_with_total("A", jobs_time / 2),
        job_with_total("B", jobs_time - jobs_time / 2),
    ];

    let metrics = aggregate_shift(&jobs, Decimal::from(20), Decimal::from(660));

    assert_eq!(metrics.total_jobs_time, Decimal::from(jobs_time));
    assert_eq!(metrics.remaining_shift_time, Decimal::from(remaining));
    assert_eq!(metrics.capacity_state, state);
}

#[test]
fn test_default_tables_reject_zero_and_negative() {
    let config = RateConfig::default();

    for table in [
        &config.offset.sheet_speed,
        &config.die_cut.run_speed,
        &config.die_cut.striping,
    ] {
        assert!(resolve_range(table, 0).is_none());
        assert!(resolve_range(table, -1).is_none());
        assert!(resolve_range(table, i64::MIN).is_none());
    }
}

#[test]
fn test_remove_then_readd_is_idempotent() {
    let mut planner = ShiftPlanner::default();
    let input: JobInput = DieCutInput::new(4_500).with_new_mr(8).with_striping(20).into();

    planner.add_job("DC-A", &input).unwrap();
    let id = planner.add_job("DC-B", &input).unwrap();
    let before = planner.metrics(JobType::DieCut);

    let removed = planner.remove_job(JobType::DieCut, id).unwrap();
    let mut shift = planner.shift(JobType::DieCut).clone();
    shift.add_job(removed.with_id(uuid::Uuid::new_v4()));

    let after = shift.metrics();
    assert_eq!(before.used_time, after.used_time);
    assert_eq!(before.remaining_shift_time, after.remaining_shift_time);
    assert_eq!(before.utilization_percentage, after.utilization_percentage);
    assert_eq!(before.capacity_state, after.capacity_state);
}

#[test]
fn test_rate_config_from_json_swaps_tables() {
    let mut config = RateConfig::default();
    config.die_cut.striping.tiers[1].max = Some(80);
    config.die_cut.striping.tiers[1].label = "41-80".to_string();
    let json = config.to_json_pretty().unwrap();

    let loaded = RateConfig::from_json(&json).unwrap();
    let job = compute_die_cut_job(&loaded, &DieCutInput::new(0).with_striping(85));

    assert_eq!(job.times.total_mr(), Decimal::ZERO);
}

#[test]
fn test_full_day_plan() {
    let mut planner = ShiftPlanner::default();

    planner
        .add_job(
            "CEREAL-BOX",
            &OffsetInput::new(4, 12_000)
                .with_varnish_blanket(true)
                .with_color_wash("1-6-unit")
                .into(),
        )
        .unwrap();
    planner
        .add_job(
            "CEREAL-BOX",
            &DieCutInput::new(12_000)
                .with_new_mr(14)
                .with_mr_sheets(true)
                .into(),
        )
        .unwrap();
    planner
        .add_job(
            "CEREAL-BOX",
            &PastingInput::bottom("250-400", "250-400", 30_000).into(),
        )
        .unwrap();

    for job_type in JobType::ALL {
        let metrics = planner.metrics(job_type);
        assert_eq!(metrics.job_count, 1, "{}", job_type);
        assert_eq!(metrics.total_sheets, if job_type == JobType::Pasting { 30_000 } else { 12_000 });
        for job in planner.shift(job_type).jobs() {
            assert!(job.times().is_consistent());
            assert_eq!(job.job_type(), job_type);
        }
    }

    // 平版：32 + 15 + 30 + 12000/117
    let offset = planner.metrics(JobType::Offset);
    assert_eq!(offset.used_time.round_dp(2), Decimal::new(19956, 2));
}
