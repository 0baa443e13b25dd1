// ==========================================
// 机组利用率分析 - 主入口
// ==========================================
// 参数全部为编译期默认值（SimulationConfig::default）
// 日志级别: RUST_LOG
// ==========================================

use anyhow::Result;
use machine_util_pareto::app::run_report;
use machine_util_pareto::{logging, SimulationConfig};

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("机组利用率帕累托分析");
    tracing::info!("系统版本: {}", machine_util_pareto::VERSION);
    tracing::info!("==================================================");

    let config = SimulationConfig::default();
    let summary = run_report(&config)?;

    if summary.pool_exhausted {
        tracing::warn!(
            machines = summary.machine_count,
            "机组数量被命名组合池截断"
        );
    }
    tracing::info!("CSV: {}", summary.csv_path.display());
    tracing::info!("图表: {}", summary.html_path.display());
    tracing::info!(
        "累计闲置占比达到 80% 需要 {} / {} 台机组",
        summary.top_contributors_80pct,
        summary.machine_count
    );

    Ok(())
}
