// ==========================================
// 机组利用率分析 - 热力图面板
// ==========================================
// 色阶: RdYlGn，固定区间 [0.5, 1.0]，中点 0.8
// 坐标轴: 始终隐藏刻度标签，y 轴反向（首行在上）
// 背景: 深色；堆叠布局下以 paper 矩形铺在面板区域下方
// ==========================================

use crate::chart::figure::{AxisSlot, Panel};
use crate::chart::style::{ChartStyle, HEATMAP_TITLE};
use crate::domain::HeatmapGrid;
use serde_json::json;

/// 构建热力图面板
///
/// stacked 为 true 时，色条收缩到面板区域，面板上方加标题注释，
/// 并铺一层深色矩形作为面板背景（整图 plot_bgcolor 归帕累托面板使用）
pub fn heatmap_panel(
    grid: &HeatmapGrid,
    slot: &AxisSlot,
    stacked: bool,
    style: &ChartStyle,
) -> Panel {
    let [bottom, top] = slot.domain;

    let mut colorbar = json!({ "title": { "text": "Normalized<br>Utilization" } });
    if stacked {
        colorbar["y"] = json!((bottom + top) / 2.0);
        colorbar["len"] = json!(top - bottom);
    }

    let trace = json!({
        "type": "heatmap",
        "z": grid.z_matrix(),
        "text": grid.text_matrix(),
        "hoverinfo": "text",
        "colorscale": style.heatmap_colorscale,
        "reversescale": false,
        "zmid": style.heatmap_zmid,
        "zmax": style.heatmap_zmax,
        "zmin": style.heatmap_zmin,
        "colorbar": colorbar,
        "showlegend": false,
        "xaxis": slot.x,
        "yaxis": slot.y,
    });

    let mut panel = Panel::default();
    panel.traces.push(trace);

    panel.layout.insert(
        AxisSlot::layout_key(slot.x),
        json!({
            "showgrid": false,
            "showticklabels": false,
            "anchor": slot.y,
        }),
    );
    panel.layout.insert(
        AxisSlot::layout_key(slot.y),
        json!({
            "showgrid": false,
            "showticklabels": false,
            "autorange": "reversed",
            "domain": slot.domain,
            "anchor": slot.x,
        }),
    );

    if stacked {
        panel.annotations.push(json!({
            "text": HEATMAP_TITLE,
            "xref": "paper",
            "x": 0.5,
            "xanchor": "center",
            "yref": "paper",
            "y": top,
            "yanchor": "bottom",
            "showarrow": false,
            "font": { "size": 16 },
        }));
        panel.shapes.push(json!({
            "type": "rect",
            "xref": "paper",
            "x0": 0,
            "x1": 1,
            "yref": "paper",
            "y0": bottom,
            "y1": top,
            "fillcolor": style.heatmap_bg,
            "line": { "width": 0 },
            "layer": "below",
        }));
    }

    panel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HeatmapCell;

    fn grid() -> HeatmapGrid {
        let cell = |name: &str, value: f64| HeatmapCell {
            machine_name: name.to_string(),
            value,
            hover_text: format!("{} - Normalized Utilization: {:.2}", name, value),
        };
        HeatmapGrid {
            grid_size: 2,
            cells: vec![
                vec![cell("A", 1.4), cell("B", 1.1)],
                vec![cell("C", 0.7), cell("D", 0.4)],
            ],
        }
    }

    fn slot() -> AxisSlot {
        AxisSlot {
            x: "x2",
            y: "y3",
            y_secondary: None,
            domain: [0.0, 0.42],
        }
    }

    #[test]
    fn test_color_domain_is_fixed() {
        let panel = heatmap_panel(&grid(), &slot(), false, &ChartStyle::default());
        let trace = &panel.traces[0];
        assert_eq!(trace["zmin"], json!(0.5));
        assert_eq!(trace["zmax"], json!(1.0));
        assert_eq!(trace["zmid"], json!(0.8));
        assert_eq!(trace["colorscale"], "RdYlGn");
        assert_eq!(trace["z"], json!([[1.4, 1.1], [0.7, 0.4]]));
    }

    #[test]
    fn test_axes_hide_tick_labels() {
        let panel = heatmap_panel(&grid(), &slot(), false, &ChartStyle::default());
        assert_eq!(panel.layout["xaxis2"]["showticklabels"], json!(false));
        assert_eq!(panel.layout["yaxis3"]["showticklabels"], json!(false));
        assert_eq!(panel.layout["yaxis3"]["autorange"], "reversed");
        assert!(panel.annotations.is_empty());
        assert!(panel.shapes.is_empty());
    }

    #[test]
    fn test_stacked_panel_gets_title_annotation() {
        let panel = heatmap_panel(&grid(), &slot(), true, &ChartStyle::default());
        assert_eq!(panel.annotations.len(), 1);
        assert_eq!(panel.traces[0]["colorbar"]["len"], json!(0.42));

        // 深色背景矩形覆盖热力图区域
        assert_eq!(panel.shapes.len(), 1);
        let bg = &panel.shapes[0];
        assert_eq!(bg["type"], "rect");
        assert_eq!(bg["fillcolor"], "#444");
        assert_eq!(bg["layer"], "below");
        assert_eq!(bg["y0"], json!(0.0));
        assert_eq!(bg["y1"], json!(0.42));
    }
}
