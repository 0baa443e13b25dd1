// ==========================================
// 机组利用率分析 - 核心库
// ==========================================
// 流程: 机组命名 → 利用率合成 → 帕累托/热力图视图 → CSV + HTML
// 技术栈: Rust + csv + serde_json + plotly.js
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与视图类型
pub mod domain;

// 引擎层 - 命名 / 合成 / 派生视图
pub mod engine;

// 图表层 - plotly figure 与 HTML
pub mod chart;

// 导出层 - 文件落盘
pub mod export;

// 配置层 - 运行参数
pub mod config;

// 应用层 - 报表运行器
pub mod app;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// 阶段耗时
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::SimulationConfig;
pub use domain::{
    ChartKind, HeatmapCell, HeatmapGrid, PanelLayout, ParetoRow, ParetoView, UtilizationRecord,
};
pub use engine::{GeneratedNames, NameGenerator, UtilizationPipeline, UtilizationSynthesizer};
pub use error::{PipelineError, PipelineResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "machine-util-pareto";
