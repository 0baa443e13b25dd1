// ==========================================
// 机组利用率分析 - 利用率记录与派生视图
// ==========================================
// 原始快照: Vec<UtilizationRecord>（生成后不再修改）
// 派生视图: ParetoView / HeatmapGrid（各自持有排序后的副本）
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// UtilizationRecord - 单台机组利用率记录
// ==========================================
// 序列化列名与导出 CSV 表头一致
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationRecord {
    /// 机组名称
    #[serde(rename = "machine_name")]
    pub name: String,

    /// 目标利用率
    #[serde(rename = "target_util_rate")]
    pub target_utilization_rate: f64,

    /// 全年总小时
    #[serde(rename = "total_hours_year")]
    pub total_hours: u32,

    /// 全年闲置小时
    #[serde(rename = "idle_hours_year")]
    pub idle_hours: u32,

    /// 全年利用小时，位于 [0, total_hours]
    #[serde(rename = "utilized_hours_year")]
    pub utilized_hours: u32,

    /// 实际利用率
    pub utilization_rate: f64,

    /// 实际利用率 / 目标利用率（不截断，可大于 1）
    #[serde(rename = "utilization_rate_normalized")]
    pub normalized_utilization_rate: f64,

    /// 1 - 归一化利用率（可为负）
    #[serde(rename = "under_utilized_rate_normalized")]
    pub under_utilization_rate_normalized: f64,

    /// 闲置小时占全部机组闲置小时的百分比
    #[serde(rename = "total_idle_pct")]
    pub idle_share_pct: f64,
}

// ==========================================
// ParetoView - 帕累托图视图
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoRow {
    #[serde(flatten)]
    pub record: UtilizationRecord,

    /// 按排序顺序的闲置占比累计和
    pub cumulative_sum: f64,

    /// 累计百分比（末行收敛到 100）
    pub cumulative_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParetoView {
    /// 按 under_utilization_rate_normalized 降序
    pub rows: Vec<ParetoRow>,

    /// 闲置占比总和
    pub total_share: f64,
}

impl ParetoView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 累计百分比首次达到阈值所需的机组数
    ///
    /// 视图为空时返回 0
    pub fn count_to_reach(&self, threshold_pct: f64) -> usize {
        self.rows
            .iter()
            .position(|r| r.cumulative_percent >= threshold_pct)
            .map(|idx| idx + 1)
            .unwrap_or(self.rows.len())
    }

    /// 左轴数值最大值
    pub fn max_value(&self) -> Option<f64> {
        self.rows
            .iter()
            .map(|r| r.record.under_utilization_rate_normalized)
            .max_by(f64::total_cmp)
    }
}

// ==========================================
// HeatmapGrid - 排序热力图视图
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub machine_name: String,
    pub value: f64,
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapGrid {
    /// 边长
    pub grid_size: usize,

    /// 行主序，cells[row][col]
    pub cells: Vec<Vec<HeatmapCell>>,
}

impl HeatmapGrid {
    pub fn cell_count(&self) -> usize {
        self.cells.iter().map(|row| row.len()).sum()
    }

    pub fn z_matrix(&self) -> Vec<Vec<f64>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.value).collect())
            .collect()
    }

    pub fn text_matrix(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.hover_text.clone()).collect())
            .collect()
    }
}
