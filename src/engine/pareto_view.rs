// ==========================================
// 机组利用率分析 - 帕累托视图
// ==========================================
// 排序: under_utilization_rate_normalized 降序（稳定排序）
// 累计: idle_share_pct 累计和 / 总和 × 100
// ==========================================

use crate::domain::{ParetoRow, ParetoView, UtilizationRecord};
use crate::error::{PipelineError, PipelineResult};

/// 构建帕累托视图
///
/// 输入切片不会被修改，视图持有排序后的副本。
pub fn build_pareto_view(records: &[UtilizationRecord]) -> PipelineResult<ParetoView> {
    let mut sorted: Vec<UtilizationRecord> = records.to_vec();
    sorted.sort_by(|a, b| {
        b.under_utilization_rate_normalized
            .total_cmp(&a.under_utilization_rate_normalized)
    });

    let total_share: f64 = sorted.iter().map(|r| r.idle_share_pct).sum();
    if !sorted.is_empty() && total_share <= 0.0 {
        return Err(PipelineError::ZeroIdleTotal { rows: sorted.len() });
    }

    let mut cumulative_sum = 0.0;
    let rows = sorted
        .into_iter()
        .map(|record| {
            cumulative_sum += record.idle_share_pct;
            ParetoRow {
                record,
                cumulative_sum,
                cumulative_percent: cumulative_sum / total_share * 100.0,
            }
        })
        .collect();

    Ok(ParetoView { rows, total_share })
}
