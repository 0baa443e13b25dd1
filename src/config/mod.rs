// ==========================================
// 机组利用率分析 - 配置层
// ==========================================
// 职责: 运行参数定义、默认值与校验
// ==========================================

pub mod simulation_config;

pub use simulation_config::{config_keys, SimulationConfig, HOURS_PER_YEAR};
