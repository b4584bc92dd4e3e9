//! 平版、模切、糊盒三個班次的排班範例

use press::{
    AdmissionPolicy, DieCutInput, JobInput, JobType, OffsetInput, PastingInput, RateConfig,
    ShiftConfig, ShiftPlanner, SidePastingType,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    println!("===== Print Shop Shift Plan =====\n");

    let mut planner = ShiftPlanner::new(RateConfig::default(), &ShiftConfig::default());

    // 平版印刷
    println!("[1] Offset");
    let offset_jobs: Vec<(&str, JobInput)> = vec![
        (
            "CEREAL-BOX",
            OffsetInput::new(4, 5_000)
                .with_varnish_blanket(true)
                .with_color_wash("1-3-unit")
                .into(),
        ),
        (
            "LEAFLET-A5",
            OffsetInput::new(2, 20_000).with_color_wash("1-unit").into(),
        ),
    ];
    for (name, input) in &offset_jobs {
        planner.add_job(name, input)?;
    }
    print_shift(&planner, JobType::Offset);

    // 模切
    println!("[2] Die-cut");
    let die_cut: JobInput = DieCutInput::new(12_000)
        .with_new_mr(14)
        .with_emboss(2)
        .with_mr_sheets(true)
        .with_striping(36)
        .into();
    planner.add_job("CEREAL-BOX", &die_cut)?;

    let repeat: JobInput = DieCutInput::new(60_000).with_repeated_mr(true).into();
    match planner.add_job("SLEEVE-REPEAT", &repeat) {
        Ok(_) => {}
        Err(err) => println!("    rejected: {}", err),
    }
    print_shift(&planner, JobType::DieCut);

    // 糊盒（確認後可超排）
    println!("[3] Pasting");
    let side: JobInput = PastingInput::side("400-600", SidePastingType::Box, "400-600", 60_000)
        .with_b_to_s(true)
        .into();
    planner.add_job_with_policy("CEREAL-BOX", &side, AdmissionPolicy::AllowOverbooking)?;

    let bottom: JobInput = PastingInput::bottom("more-400", "more-400", 40_000).into();
    planner.add_job("MAILER", &bottom)?;
    print_shift(&planner, JobType::Pasting);

    Ok(())
}

fn print_shift(planner: &ShiftPlanner, job_type: JobType) {
    let shift = planner.shift(job_type);
    for job in shift.jobs() {
        println!(
            "    - {:<14} MR {:>7} min  run {:>7} min  total {:>7} min  ({} sheets)",
            job.name,
            job.total_mr().round_dp(1),
            job.production_time().round_dp(1),
            job.total_job_time().round_dp(1),
            job.sheet_count()
        );
    }

    let metrics = shift.metrics();
    println!(
        "    used {} / {} min, remaining {} min, utilization {}% ({:?})",
        metrics.used_time.round_dp(1),
        metrics.shift_duration,
        metrics.remaining_shift_time.round_dp(1),
        metrics.utilization_percentage.round_dp(1),
        metrics.capacity_state
    );
    for warning in metrics.warnings() {
        println!("    [{:?}] {}", warning.severity, warning.message);
    }
    println!();
}
