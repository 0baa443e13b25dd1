// ==========================================
// 机组利用率分析 - 图表构建
// ==========================================
// 单一入口 build_figure，按面板布局分配坐标轴与纵向区域
// 输出 plotly.js figure: { data: [...], layout: {...} }
// ==========================================

use crate::chart::heatmap::heatmap_panel;
use crate::chart::pareto::pareto_panel;
use crate::chart::style::{ChartStyle, HEATMAP_TITLE, PARETO_TITLE};
use crate::domain::{ChartKind, HeatmapGrid, PanelLayout, ParetoView};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// plotly.js figure
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

/// 面板片段：traces + 需要合并进 layout 的键
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub traces: Vec<Value>,
    pub layout: Map<String, Value>,
    pub shapes: Vec<Value>,
    pub annotations: Vec<Value>,
}

/// 面板坐标轴分配
///
/// 轴引用使用 plotly 的 trace 写法（"x"、"y2"），
/// layout 键由 [`AxisSlot::layout_key`] 换算（"xaxis"、"yaxis2"）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSlot {
    pub x: &'static str,
    pub y: &'static str,
    /// 帕累托右轴
    pub y_secondary: Option<&'static str>,
    /// 纵向区域 [下, 上]（paper 坐标）
    pub domain: [f64; 2],
}

impl AxisSlot {
    pub fn layout_key(axis_ref: &str) -> String {
        let (letter, index) = axis_ref.split_at(1);
        format!("{}axis{}", letter, index)
    }
}

/// 按布局为每个面板分配坐标轴
pub fn assign_axes(layout: PanelLayout) -> Vec<(ChartKind, AxisSlot)> {
    match layout {
        PanelLayout::Single(ChartKind::Pareto) => vec![(
            ChartKind::Pareto,
            AxisSlot {
                x: "x",
                y: "y",
                y_secondary: Some("y2"),
                domain: [0.0, 1.0],
            },
        )],
        PanelLayout::Single(ChartKind::Heatmap) => vec![(
            ChartKind::Heatmap,
            AxisSlot {
                x: "x",
                y: "y",
                y_secondary: None,
                domain: [0.0, 1.0],
            },
        )],
        PanelLayout::Stacked => vec![
            (
                ChartKind::Pareto,
                AxisSlot {
                    x: "x",
                    y: "y",
                    y_secondary: Some("y2"),
                    domain: [0.58, 1.0],
                },
            ),
            (
                ChartKind::Heatmap,
                AxisSlot {
                    x: "x2",
                    y: "y3",
                    y_secondary: None,
                    domain: [0.0, 0.42],
                },
            ),
        ],
    }
}

/// 构建图表
///
/// # 参数
/// - layout: 单面板或上下堆叠
/// - pareto / heatmap: 派生视图（未包含在布局中的视图会被忽略）
/// - style: 阈值、色阶、配色等样式参数
pub fn build_figure(
    layout: PanelLayout,
    pareto: &ParetoView,
    heatmap: &HeatmapGrid,
    style: &ChartStyle,
) -> Figure {
    let slots = assign_axes(layout);
    let stacked = slots.len() > 1;

    let mut data = Vec::new();
    let mut layout_map = Map::new();
    let mut shapes = Vec::new();
    let mut annotations = Vec::new();

    for (kind, slot) in &slots {
        let panel = match kind {
            ChartKind::Pareto => pareto_panel(pareto, slot, style),
            ChartKind::Heatmap => heatmap_panel(heatmap, slot, stacked, style),
        };
        data.extend(panel.traces);
        layout_map.extend(panel.layout);
        shapes.extend(panel.shapes);
        annotations.extend(panel.annotations);
    }

    let (title, width, height) = match layout {
        PanelLayout::Single(ChartKind::Pareto) => (PARETO_TITLE, None, 600),
        PanelLayout::Single(ChartKind::Heatmap) => (HEATMAP_TITLE, Some(600), 600),
        PanelLayout::Stacked => (PARETO_TITLE, None, 1200),
    };

    layout_map.insert(
        "title".to_string(),
        json!({
            "text": title,
            "y": 0.98,
            "x": 0.5,
            "xanchor": "center",
            "yanchor": "top",
            "font": { "size": 20, "family": "Inter, sans-serif" }
        }),
    );
    layout_map.insert(
        "margin".to_string(),
        json!({ "l": 40, "r": 40, "t": 60, "b": 40 }),
    );
    layout_map.insert("height".to_string(), json!(height));
    if let Some(width) = width {
        layout_map.insert("width".to_string(), json!(width));
        layout_map.insert("autosize".to_string(), json!(false));
    }
    layout_map.insert("paper_bgcolor".to_string(), json!("white"));

    // 单独热力图用整图深色底；堆叠时热力图背景由面板矩形提供
    let plot_bg = if layout == PanelLayout::Single(ChartKind::Heatmap) {
        style.heatmap_bg
    } else {
        "white"
    };
    layout_map.insert("plot_bgcolor".to_string(), json!(plot_bg));
    layout_map.insert("showlegend".to_string(), json!(layout.contains(ChartKind::Pareto)));
    layout_map.insert("shapes".to_string(), Value::Array(shapes));
    layout_map.insert("annotations".to_string(), Value::Array(annotations));

    Figure {
        data,
        layout: Value::Object(layout_map),
    }
}
