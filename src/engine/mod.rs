// ==========================================
// 机组利用率分析 - 引擎层
// ==========================================
// 职责: 命名生成、利用率合成、派生视图
// 红线: 引擎不做文件 IO，随机源由调用方显式传入
// ==========================================

pub mod heatmap_view;
pub mod name_generator;
pub mod pareto_view;
pub mod pipeline;
pub mod rng;
pub mod utilization;

// 重导出核心引擎
pub use heatmap_view::build_heatmap_view;
pub use name_generator::{GeneratedNames, NameGenerator, NAME_SEPARATOR, PREFIXES, SUFFIXES};
pub use pareto_view::build_pareto_view;
pub use pipeline::{PipelineOutput, UtilizationPipeline};
pub use rng::{seeded_rng, SimRng};
pub use utilization::{UsageSample, UtilizationSynthesizer};
