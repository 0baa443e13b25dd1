// ==========================================
// 机组利用率分析 - HTML 文档渲染
// ==========================================
// 模板: templates/report.html（askama，标题等文本自动转义）
// 运行时: plotly.js 内联（自包含）或 CDN script 标签
// ==========================================

use crate::chart::figure::Figure;
use crate::error::{PipelineError, PipelineResult};
use askama::Template;
use chrono::{DateTime, Local};
use std::path::Path;
use uuid::Uuid;

/// plotly.js 发行版地址（未配置本地运行时时使用）
pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

// ==========================================
// PlotlyRuntime - plotly.js 加载方式
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotlyRuntime {
    /// 脚本源码内联进文档，离线可用
    Inline(String),
    /// 通过 script src 引用
    Cdn(String),
}

impl Default for PlotlyRuntime {
    fn default() -> Self {
        PlotlyRuntime::Cdn(PLOTLY_JS_URL.to_string())
    }
}

impl PlotlyRuntime {
    /// 读取本地 plotly.min.js，生成自包含文档用的运行时
    pub fn inline_from_file(path: &Path) -> PipelineResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(format!("plotly.js 读取失败 ({}): {}", path.display(), e))
        })?;
        Ok(PlotlyRuntime::Inline(source))
    }

    /// 有本地路径时内联，否则回退到 CDN
    pub fn resolve(local_path: Option<&str>) -> PipelineResult<Self> {
        match local_path {
            Some(path) => Self::inline_from_file(Path::new(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn is_self_contained(&self) -> bool {
        matches!(self, PlotlyRuntime::Inline(_))
    }
}

/// 渲染参数
#[derive(Debug, Clone)]
pub struct HtmlDocument<'a> {
    pub title: &'a str,
    pub figure: &'a Figure,
    pub runtime: &'a PlotlyRuntime,
    pub generated_at: DateTime<Local>,
    /// 配置快照 JSON，写入文档便于复现
    pub config_snapshot: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    title: &'a str,
    generator: String,
    div_id: String,
    inline_runtime: Option<&'a str>,
    runtime_url: Option<&'a str>,
    figure_json: String,
    config_snapshot: Option<String>,
    generated_at: String,
}

/// 渲染 HTML 文档
pub fn render_html(doc: &HtmlDocument<'_>) -> PipelineResult<String> {
    let (inline_runtime, runtime_url) = match doc.runtime {
        PlotlyRuntime::Inline(source) => (Some(source.as_str()), None),
        PlotlyRuntime::Cdn(url) => (None, Some(url.as_str())),
    };

    let template = ReportTemplate {
        title: doc.title,
        generator: format!("{} {}", crate::APP_NAME, crate::VERSION),
        div_id: Uuid::new_v4().to_string(),
        inline_runtime,
        runtime_url,
        figure_json: escape_script(&serde_json::to_string(doc.figure)?),
        config_snapshot: doc.config_snapshot.map(escape_script),
        generated_at: doc.generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    };

    Ok(template.render()?)
}

/// 防止内联 JSON 提前闭合 script 标签
fn escape_script(raw: &str) -> String {
    raw.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn figure() -> Figure {
        Figure {
            data: vec![json!({ "type": "bar", "name": "</script><b>x</b>" })],
            layout: json!({ "title": { "text": "<b>T</b>" } }),
        }
    }

    fn render(runtime: &PlotlyRuntime, snapshot: Option<&str>) -> String {
        let fig = figure();
        render_html(&HtmlDocument {
            title: "Machine <Utilization>",
            figure: &fig,
            runtime,
            generated_at: Local::now(),
            config_snapshot: snapshot,
        })
        .unwrap()
    }

    #[test]
    fn test_render_contains_plot_call_and_runtime() {
        let html = render(&PlotlyRuntime::default(), Some(r#"{"seed":42}"#));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("<script src=\"{}\"", PLOTLY_JS_URL)));
        assert!(html.contains("Plotly.newPlot("));
        assert!(html.contains(r#"id="config-snapshot">{"seed":42}</script>"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render(&PlotlyRuntime::default(), None);
        assert!(html.contains("<title>Machine &lt;Utilization&gt;</title>"));
    }

    #[test]
    fn test_inline_json_cannot_close_script() {
        let html = render(&PlotlyRuntime::default(), None);

        // 只有模板自身的闭合标签
        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("<\\/script>"));
    }

    #[test]
    fn test_inline_runtime_is_self_contained() {
        let runtime = PlotlyRuntime::Inline("window.Plotly = { newPlot: function () {} };".into());
        assert!(runtime.is_self_contained());

        let html = render(&runtime, None);
        assert!(!html.contains("<script src="));
        assert!(!html.contains("https://"));
        assert!(html.contains("window.Plotly = { newPlot: function () {} };"));
    }

    #[test]
    fn test_resolve_reads_local_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plotly.min.js");
        std::fs::write(&path, "/* plotly */").unwrap();

        let runtime = PlotlyRuntime::resolve(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(runtime, PlotlyRuntime::Inline("/* plotly */".to_string()));

        assert_eq!(PlotlyRuntime::resolve(None).unwrap(), PlotlyRuntime::default());
        assert!(!PlotlyRuntime::default().is_self_contained());
    }

    #[test]
    fn test_missing_local_runtime_is_error() {
        let result = PlotlyRuntime::resolve(Some("/nonexistent/plotly.min.js"));
        assert!(matches!(result, Err(PipelineError::Io(_))));
    }
}
