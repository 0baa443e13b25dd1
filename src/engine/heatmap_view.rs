// ==========================================
// 机组利用率分析 - 排序热力图视图
// ==========================================
// 排序: normalized_utilization_rate 降序
// 布局: 行主序 grid_size × grid_size，行数必须恰好为 grid_size²
// ==========================================

use crate::config::config_keys;
use crate::domain::{HeatmapCell, HeatmapGrid, UtilizationRecord};
use crate::error::{PipelineError, PipelineResult};

/// 构建热力图视图
///
/// # 返回
/// - Err(InvalidConfig): grid_size² 溢出 usize
/// - Err(NonSquareGrid): records.len() != grid_size²
pub fn build_heatmap_view(
    records: &[UtilizationRecord],
    grid_size: usize,
) -> PipelineResult<HeatmapGrid> {
    let required = grid_size.checked_mul(grid_size).ok_or_else(|| {
        PipelineError::invalid_config(
            config_keys::GRID_SIZE,
            format!("grid_size² 超出可表示范围 (grid_size: {})", grid_size),
        )
    })?;
    if records.len() != required {
        return Err(PipelineError::NonSquareGrid {
            grid_size,
            required,
            actual: records.len(),
        });
    }

    let mut sorted: Vec<&UtilizationRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.normalized_utilization_rate
            .total_cmp(&a.normalized_utilization_rate)
    });

    let cells: Vec<Vec<HeatmapCell>> = sorted
        .chunks(grid_size.max(1))
        .map(|row| {
            row.iter()
                .map(|r| HeatmapCell {
                    machine_name: r.name.clone(),
                    value: r.normalized_utilization_rate,
                    hover_text: format!(
                        "{} - Normalized Utilization: {:.2}",
                        r.name, r.normalized_utilization_rate
                    ),
                })
                .collect()
        })
        .collect();

    Ok(HeatmapGrid { grid_size, cells })
}
