// ==========================================
// 机组利用率分析 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 图表种类 (Chart Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartKind {
    Pareto,  // 帕累托图（柱 + 累计折线）
    Heatmap, // 排序热力图
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Pareto => write!(f, "PARETO"),
            ChartKind::Heatmap => write!(f, "HEATMAP"),
        }
    }
}

// ==========================================
// 面板布局 (Panel Layout)
// ==========================================
// Single: 文档只含一张图
// Stacked: 帕累托图在上、热力图在下，同一张 figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanelLayout {
    Single(ChartKind),
    Stacked,
}

impl PanelLayout {
    /// 布局中包含的图表（自上而下）
    pub fn panels(&self) -> Vec<ChartKind> {
        match self {
            PanelLayout::Single(kind) => vec![*kind],
            PanelLayout::Stacked => vec![ChartKind::Pareto, ChartKind::Heatmap],
        }
    }

    pub fn contains(&self, kind: ChartKind) -> bool {
        self.panels().contains(&kind)
    }
}

impl fmt::Display for PanelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelLayout::Single(kind) => write!(f, "SINGLE({})", kind),
            PanelLayout::Stacked => write!(f, "STACKED"),
        }
    }
}
