// ==========================================
// 图表构建 集成测试
// ==========================================
// 测试目标: 布局参数化下 figure 的坐标轴与面板契约
// ==========================================

use machine_util_pareto::chart::{build_figure, ChartStyle};
use machine_util_pareto::{ChartKind, PanelLayout, SimulationConfig, UtilizationPipeline};
use serde_json::json;

fn default_output() -> machine_util_pareto::engine::PipelineOutput {
    UtilizationPipeline::new(SimulationConfig::default())
        .run()
        .expect("pipeline should run")
}

#[test]
fn test_stacked_figure_has_both_panels() {
    let output = default_output();
    let figure = build_figure(
        PanelLayout::Stacked,
        &output.pareto,
        &output.heatmap,
        &ChartStyle::default(),
    );

    let types: Vec<&str> = figure
        .data
        .iter()
        .map(|t| t["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["bar", "scatter", "heatmap"]);

    let layout = &figure.layout;
    assert_eq!(layout["yaxis2"]["range"], json!([0, 100]));
    assert_eq!(layout["yaxis2"]["overlaying"], "y");
    assert_eq!(layout["yaxis3"]["autorange"], "reversed");
    assert_eq!(figure.data[2]["xaxis"], "x2");
    assert_eq!(figure.data[2]["yaxis"], "y3");

    // 100 台机组 > 50，隐藏帕累托 x 轴标签
    assert_eq!(layout["xaxis"]["showticklabels"], json!(false));
    assert_eq!(layout["xaxis2"]["showticklabels"], json!(false));

    // 热力图面板下方铺深色底，与单图布局的背景一致
    let shapes = layout["shapes"].as_array().unwrap();
    let backdrop = shapes
        .iter()
        .find(|s| s["type"] == "rect")
        .expect("stacked heatmap should have a backdrop");
    assert_eq!(backdrop["fillcolor"], "#444");
    assert_eq!(backdrop["layer"], "below");
    assert_eq!(layout["plot_bgcolor"], "white");
}

#[test]
fn test_single_pareto_figure() {
    let output = default_output();
    let figure = build_figure(
        PanelLayout::Single(ChartKind::Pareto),
        &output.pareto,
        &output.heatmap,
        &ChartStyle::default(),
    );

    assert_eq!(figure.data.len(), 2);
    let shapes = figure.layout["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0]["yref"], "y2");
    assert_eq!(figure.layout["plot_bgcolor"], "white");
}

#[test]
fn test_single_heatmap_figure() {
    let output = default_output();
    let figure = build_figure(
        PanelLayout::Single(ChartKind::Heatmap),
        &output.pareto,
        &output.heatmap,
        &ChartStyle::default(),
    );

    assert_eq!(figure.data.len(), 1);
    let trace = &figure.data[0];
    assert_eq!(trace["zmin"], json!(0.5));
    assert_eq!(trace["zmax"], json!(1.0));
    assert_eq!(trace["zmid"], json!(0.8));
    assert_eq!(trace["z"].as_array().unwrap().len(), 10);
    assert_eq!(figure.layout["width"], json!(600));
    assert_eq!(figure.layout["plot_bgcolor"], "#444");
    assert!(figure.layout["shapes"].as_array().unwrap().is_empty());
}
