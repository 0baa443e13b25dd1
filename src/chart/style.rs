// ==========================================
// 机组利用率分析 - 图表样式
// ==========================================
// 常量为默认值，ChartStyle 作为参数传入图表构建
// ==========================================

/// 帕累托阈值线（右轴百分比）
pub const THRESHOLD_PCT: f64 = 80.0;

/// 帕累托 x 轴标签数量上限，超过则隐藏刻度标签
pub const TICK_LABEL_LIMIT: usize = 50;

/// 右轴刻度间隔
pub const CUMULATIVE_TICK_STEP: u32 = 10;

/// 热力图色阶区间与中点
pub const HEATMAP_ZMIN: f64 = 0.5;
pub const HEATMAP_ZMAX: f64 = 1.0;
pub const HEATMAP_ZMID: f64 = 0.8;

/// 左轴上方留白系数
pub const VALUE_AXIS_HEADROOM: f64 = 1.05;

pub const PARETO_TITLE: &str = "Pareto Analysis: Normalized Machine Utilization Rate";
pub const HEATMAP_TITLE: &str = "<b>Sorted Heatmap of Normalized Machine Utilization</b>";
pub const PARETO_VALUE_LABEL: &str = "under_utilized_rate_normalized";
pub const PARETO_X_TITLE: &str = "Machine Name (Sorted by Normalized Rate)";

pub const BAR_COLOR: &str = "darkred";
pub const LINE_COLOR: &str = "rgb(255, 69, 0)";
pub const THRESHOLD_COLOR: &str = "red";
pub const HEATMAP_COLORSCALE: &str = "RdYlGn";
pub const HEATMAP_BG: &str = "#444";

// ==========================================
// ChartStyle - 图表样式参数
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// 阈值线位置（右轴百分比）
    pub threshold_pct: f64,

    /// 帕累托 x 轴标签上限
    pub tick_label_limit: usize,

    /// 左轴留白系数
    pub value_axis_headroom: f64,

    /// 热力图色阶 [zmin, zmax] 与中点
    pub heatmap_zmin: f64,
    pub heatmap_zmax: f64,
    pub heatmap_zmid: f64,

    pub bar_color: &'static str,
    pub line_color: &'static str,
    pub threshold_color: &'static str,
    pub heatmap_colorscale: &'static str,

    /// 热力图面板背景
    pub heatmap_bg: &'static str,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            threshold_pct: THRESHOLD_PCT,
            tick_label_limit: TICK_LABEL_LIMIT,
            value_axis_headroom: VALUE_AXIS_HEADROOM,
            heatmap_zmin: HEATMAP_ZMIN,
            heatmap_zmax: HEATMAP_ZMAX,
            heatmap_zmid: HEATMAP_ZMID,
            bar_color: BAR_COLOR,
            line_color: LINE_COLOR,
            threshold_color: THRESHOLD_COLOR,
            heatmap_colorscale: HEATMAP_COLORSCALE,
            heatmap_bg: HEATMAP_BG,
        }
    }
}
