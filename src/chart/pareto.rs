// ==========================================
// 机组利用率分析 - 帕累托面板
// ==========================================
// 左轴: 柱状 under_utilized_rate_normalized
// 右轴: 累计百分比折线，范围固定 [0, 100]，刻度间隔 10
// 阈值: 右轴 80% 处虚线 + 注释
// ==========================================

use crate::chart::figure::{AxisSlot, Panel};
use crate::chart::style::{
    ChartStyle, CUMULATIVE_TICK_STEP, PARETO_VALUE_LABEL, PARETO_X_TITLE,
};
use crate::domain::ParetoView;
use serde_json::{json, Value};

/// 构建帕累托面板
pub fn pareto_panel(view: &ParetoView, slot: &AxisSlot, style: &ChartStyle) -> Panel {
    let y2 = slot.y_secondary.unwrap_or("y2");
    let names: Vec<&str> = view.rows.iter().map(|r| r.record.name.as_str()).collect();
    let values: Vec<f64> = view
        .rows
        .iter()
        .map(|r| r.record.under_utilization_rate_normalized)
        .collect();
    let cumulative: Vec<f64> = view.rows.iter().map(|r| r.cumulative_percent).collect();

    let bars = json!({
        "type": "bar",
        "x": names,
        "y": values,
        "name": PARETO_VALUE_LABEL,
        "marker": { "color": style.bar_color },
        "hovertemplate": "%{x}: %{y:.2f}<extra></extra>",
        "xaxis": slot.x,
        "yaxis": slot.y,
    });

    let line = json!({
        "type": "scatter",
        "mode": "lines+markers",
        "x": names,
        "y": cumulative,
        "name": "Cumulative Percentage",
        "line": { "color": style.line_color, "width": 3 },
        "marker": { "symbol": "circle", "size": 8 },
        "hovertemplate": "%{x}: %{y:.1f}%",
        "xaxis": slot.x,
        "yaxis": y2,
    });

    let mut panel = Panel {
        traces: vec![bars, line],
        ..Panel::default()
    };
    let show_tick_labels = view.len() <= style.tick_label_limit;

    panel.layout.insert(
        AxisSlot::layout_key(slot.x),
        json!({
            "title": { "text": PARETO_X_TITLE },
            "anchor": slot.y,
            "showticklabels": show_tick_labels,
        }),
    );

    let mut value_axis = json!({
        "title": { "text": PARETO_VALUE_LABEL },
        "domain": slot.domain,
        "anchor": slot.x,
        "showgrid": false,
    });
    // 最大值非正时交给 plotly 自动范围
    if let Some(max) = view.max_value().filter(|m| *m > 0.0) {
        value_axis["range"] = json!([0.0, max * style.value_axis_headroom]);
    }
    panel
        .layout
        .insert(AxisSlot::layout_key(slot.y), value_axis);

    panel.layout.insert(
        AxisSlot::layout_key(y2),
        json!({
            "title": { "text": "Cumulative Percentage (%)" },
            "overlaying": slot.y,
            "side": "right",
            "anchor": slot.x,
            "range": [0, 100],
            "tickvals": cumulative_ticks(),
            "gridcolor": "lightgray",
        }),
    );

    panel.shapes.push(threshold_line(slot.x, y2, style));
    panel
        .annotations
        .push(threshold_annotation(slot.x, y2, style));

    panel
}

/// 右轴刻度 0, 10, ..., 100
pub fn cumulative_ticks() -> Vec<u32> {
    (0..=100).step_by(CUMULATIVE_TICK_STEP as usize).collect()
}

fn threshold_line(x: &str, y2: &str, style: &ChartStyle) -> Value {
    json!({
        "type": "line",
        "xref": format!("{} domain", x),
        "x0": 0,
        "x1": 1,
        "yref": y2,
        "y0": style.threshold_pct,
        "y1": style.threshold_pct,
        "line": { "dash": "dash", "color": style.threshold_color },
    })
}

fn threshold_annotation(x: &str, y2: &str, style: &ChartStyle) -> Value {
    json!({
        "text": format!("{}% Threshold", style.threshold_pct),
        "xref": format!("{} domain", x),
        "x": 1,
        "xanchor": "right",
        "yref": y2,
        "y": style.threshold_pct,
        "yanchor": "bottom",
        "showarrow": false,
        "font": { "size": 12, "color": style.threshold_color },
    })
}
