// ==========================================
// 机组利用率分析 - 图表层
// ==========================================
// 职责: 派生视图 → plotly.js figure → HTML 文档
// 红线: 只做声明式映射，不修改视图数据
// ==========================================

pub mod figure;
pub mod heatmap;
pub mod html;
pub mod pareto;
pub mod style;

pub use figure::{assign_axes, build_figure, AxisSlot, Figure, Panel};
pub use html::{render_html, HtmlDocument, PlotlyRuntime, PLOTLY_JS_URL};
pub use style::ChartStyle;
