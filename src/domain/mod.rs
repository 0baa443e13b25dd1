// ==========================================
// 机组利用率分析 - 领域模型层
// ==========================================
// 职责: 定义利用率记录、派生视图与图表布局类型
// 红线: 不含 IO，不含随机抽样逻辑
// ==========================================

pub mod types;
pub mod utilization;

// 重导出核心类型
pub use types::{ChartKind, PanelLayout};
pub use utilization::{HeatmapCell, HeatmapGrid, ParetoRow, ParetoView, UtilizationRecord};
