// ==========================================
// 机组利用率分析 - 应用层
// ==========================================
// 职责: 串联流水线、图表与导出，供可执行文件调用
// ==========================================

pub mod runner;

// 重导出
pub use runner::{render_report, run_report, RenderedReport, ReportSummary};
