// ==========================================
// 机组利用率分析 - 报表运行器
// ==========================================
// 顺序: 校验配置 → 流水线 → 图表 → HTML → 写 CSV → 写 HTML
// 约定: 计算全部完成后才落盘，任何计算错误都不会触碰已有文件
// ==========================================

use crate::chart::style::{PARETO_TITLE, THRESHOLD_PCT};
use crate::chart::{build_figure, render_html, ChartStyle, HtmlDocument, PlotlyRuntime};
use crate::config::SimulationConfig;
use crate::domain::{ChartKind, PanelLayout};
use crate::engine::{PipelineOutput, UtilizationPipeline};
use crate::export::{write_html, write_records_csv};
use anyhow::Context;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

/// 运行摘要
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// 实际生成的机组数量
    pub machine_count: usize,

    /// 请求数量超出命名组合池
    pub pool_exhausted: bool,

    /// 累计闲置占比达到 80% 所需机组数
    pub top_contributors_80pct: usize,

    pub csv_path: PathBuf,
    pub html_path: PathBuf,
    pub generated_at: DateTime<Local>,
}

/// 渲染好、尚未落盘的报表
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub output: PipelineOutput,
    pub html: String,
    pub generated_at: DateTime<Local>,
}

/// 计算流水线并渲染 HTML（不写文件）
pub fn render_report(config: &SimulationConfig) -> anyhow::Result<RenderedReport> {
    config.validate().context("配置校验失败")?;

    let output = UtilizationPipeline::new(config.clone())
        .run()
        .context("利用率流水线执行失败")?;

    let figure = build_figure(
        config.layout,
        &output.pareto,
        &output.heatmap,
        &ChartStyle::default(),
    );
    let runtime = PlotlyRuntime::resolve(config.plotly_js_path.as_deref())
        .context("plotly.js 运行时加载失败")?;
    if !runtime.is_self_contained() {
        tracing::debug!("未配置本地 plotly.js，HTML 通过 CDN 加载运行时");
    }
    let snapshot = config.snapshot_json().context("配置快照序列化失败")?;
    let generated_at = Local::now();

    let html = render_html(&HtmlDocument {
        title: document_title(config.layout),
        figure: &figure,
        runtime: &runtime,
        generated_at,
        config_snapshot: Some(&snapshot),
    })
    .context("HTML 渲染失败")?;

    Ok(RenderedReport {
        output,
        html,
        generated_at,
    })
}

/// 运行完整报表并写出 CSV 与 HTML
pub fn run_report(config: &SimulationConfig) -> anyhow::Result<ReportSummary> {
    tracing::info!(
        seed = config.seed,
        machines = config.machine_count,
        layout = %config.layout,
        "开始生成机组利用率报表"
    );

    let report = render_report(config)?;

    let csv_path = PathBuf::from(&config.csv_path);
    let html_path = PathBuf::from(&config.html_path);

    write_records_csv(&csv_path, &report.output.raw)
        .with_context(|| format!("CSV 写出失败: {}", csv_path.display()))?;
    write_html(&html_path, &report.html)
        .with_context(|| format!("HTML 写出失败: {}", html_path.display()))?;

    let summary = ReportSummary {
        machine_count: report.output.raw.len(),
        pool_exhausted: report.output.names.exhausted,
        top_contributors_80pct: report.output.pareto.count_to_reach(THRESHOLD_PCT),
        csv_path,
        html_path,
        generated_at: report.generated_at,
    };

    tracing::info!(
        machines = summary.machine_count,
        top_contributors = summary.top_contributors_80pct,
        "报表生成完成"
    );

    Ok(summary)
}

fn document_title(layout: PanelLayout) -> &'static str {
    match layout {
        PanelLayout::Single(ChartKind::Heatmap) => "Sorted Heatmap of Normalized Machine Utilization",
        PanelLayout::Single(ChartKind::Pareto) | PanelLayout::Stacked => PARETO_TITLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::style::HEATMAP_TITLE;

    #[test]
    fn test_document_title_strips_markup() {
        assert!(!document_title(PanelLayout::Single(ChartKind::Heatmap)).contains("<b>"));
        assert!(HEATMAP_TITLE.contains(document_title(PanelLayout::Single(ChartKind::Heatmap))));
        assert_eq!(document_title(PanelLayout::Stacked), PARETO_TITLE);
    }
}
