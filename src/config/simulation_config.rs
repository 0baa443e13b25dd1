// ==========================================
// 机组利用率分析 - 模拟配置
// ==========================================
// 职责: 数据合成 / 热力图 / 输出路径等全部运行参数
// 来源: 编译期默认值，不读取命令行或环境变量
// ==========================================

use crate::domain::types::PanelLayout;
use crate::error::{PipelineError, PipelineResult};
use serde::{Deserialize, Serialize};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const SEED: &str = "seed";
    pub const MACHINE_COUNT: &str = "machine_count";
    pub const TARGET_RATE_CHOICES: &str = "target_rate_choices";
    pub const TOTAL_HOURS: &str = "total_hours";
    pub const PARETO_SHAPE: &str = "pareto_shape";
    pub const IDLE_FLOOR: &str = "idle_floor";
    pub const IDLE_SCALE: &str = "idle_scale";
    pub const GRID_SIZE: &str = "grid_size";
    pub const CSV_PATH: &str = "csv_path";
    pub const HTML_PATH: &str = "html_path";
    pub const PLOTLY_JS_PATH: &str = "plotly_js_path";
}

/// 一年的小时数
pub const HOURS_PER_YEAR: u32 = 8760;

/// 模拟配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// 随机种子（机组命名与闲置小时抽样共用）
    pub seed: u64,

    /// 机组数量
    pub machine_count: usize,

    /// 目标利用率候选值（每台机组均匀抽取一个）
    pub target_rate_choices: Vec<f64>,

    /// 全年总小时
    pub total_hours: u32,

    /// Pareto 形状参数（越小尾部越重）
    pub pareto_shape: f64,

    /// 闲置小时下限
    pub idle_floor: u32,

    /// 闲置小时缩放系数（乘在原始 Pareto 样本上）
    pub idle_scale: f64,

    /// 热力图边长（machine_count 必须等于 grid_size²）
    pub grid_size: usize,

    /// 原始数据 CSV 输出路径
    pub csv_path: String,

    /// 图表 HTML 输出路径
    pub html_path: String,

    /// 图表面板布局
    pub layout: PanelLayout,

    /// 本地 plotly.min.js 路径；设置后内联进 HTML（离线自包含），否则走 CDN
    pub plotly_js_path: Option<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            machine_count: 100,
            target_rate_choices: vec![0.3, 0.4, 0.5],
            total_hours: HOURS_PER_YEAR,
            pareto_shape: 3.7,
            idle_floor: 50,
            idle_scale: 8000.0,
            grid_size: 10,
            csv_path: "output-machine_utilization_inverted_pareto.csv".to_string(),
            html_path: "output-machine_utilization_report.html".to_string(),
            layout: PanelLayout::Stacked,
            plotly_js_path: None,
        }
    }
}

impl SimulationConfig {
    /// 从 JSON 文本解析配置，缺失字段取默认值
    pub fn from_json_str(raw: &str) -> PipelineResult<Self> {
        let config: SimulationConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// 配置快照（JSON），随报表一起输出便于复现
    pub fn snapshot_json(&self) -> PipelineResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// 校验配置
    ///
    /// 注意: 不校验 machine_count 与 grid_size 的方阵关系，
    /// 该条件由热力图视图在运行时报告。
    pub fn validate(&self) -> PipelineResult<()> {
        if self.target_rate_choices.is_empty() {
            return Err(PipelineError::invalid_config(
                config_keys::TARGET_RATE_CHOICES,
                "候选值不能为空",
            ));
        }
        if let Some(bad) = self
            .target_rate_choices
            .iter()
            .find(|r| !r.is_finite() || **r <= 0.0 || **r > 1.0)
        {
            return Err(PipelineError::invalid_config(
                config_keys::TARGET_RATE_CHOICES,
                format!("候选值必须位于 (0, 1]，实际 {}", bad),
            ));
        }
        if self.total_hours == 0 {
            return Err(PipelineError::invalid_config(
                config_keys::TOTAL_HOURS,
                "必须大于 0",
            ));
        }
        if !self.pareto_shape.is_finite() || self.pareto_shape <= 0.0 {
            return Err(PipelineError::invalid_config(
                config_keys::PARETO_SHAPE,
                format!("必须为正数，实际 {}", self.pareto_shape),
            ));
        }
        if !self.idle_scale.is_finite() || self.idle_scale < 0.0 {
            return Err(PipelineError::invalid_config(
                config_keys::IDLE_SCALE,
                format!("必须为非负有限数，实际 {}", self.idle_scale),
            ));
        }
        if self.grid_size == 0 {
            return Err(PipelineError::invalid_config(
                config_keys::GRID_SIZE,
                "必须大于 0",
            ));
        }
        if self.csv_path.trim().is_empty() {
            return Err(PipelineError::invalid_config(config_keys::CSV_PATH, "路径为空"));
        }
        if self.html_path.trim().is_empty() {
            return Err(PipelineError::invalid_config(config_keys::HTML_PATH, "路径为空"));
        }
        if let Some(path) = &self.plotly_js_path {
            if path.trim().is_empty() {
                return Err(PipelineError::invalid_config(
                    config_keys::PLOTLY_JS_PATH,
                    "路径为空",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.machine_count, config.grid_size * config.grid_size);
        assert_eq!(config.total_hours, 8760);
    }

    #[test]
    fn test_from_json_partial_override() {
        let config =
            SimulationConfig::from_json_str(r#"{"machine_count": 4, "grid_size": 2}"#).unwrap();
        assert_eq!(config.machine_count, 4);
        assert_eq!(config.grid_size, 2);
        // 未指定字段取默认值
        assert_eq!(config.seed, 42);
        assert_eq!(config.target_rate_choices, vec![0.3, 0.4, 0.5]);
    }

    #[test]
    fn test_invalid_pareto_shape_rejected() {
        let config = SimulationConfig {
            pareto_shape: 0.0,
            ..SimulationConfig::default()
        };
        match config.validate() {
            Err(PipelineError::InvalidConfig { key, .. }) => {
                assert_eq!(key, config_keys::PARETO_SHAPE)
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_target_rates_rejected() {
        let config = SimulationConfig {
            target_rate_choices: vec![],
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_target_rate_out_of_range_rejected() {
        let config = SimulationConfig {
            target_rate_choices: vec![0.5, 1.5],
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_snapshot_roundtrip_keeps_layout() {
        let config = SimulationConfig::default();
        let snapshot = config.snapshot_json().unwrap();
        assert!(snapshot.contains("\"seed\":42"));
        let restored = SimulationConfig::from_json_str(&snapshot).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_blank_plotly_js_path_rejected() {
        let config = SimulationConfig {
            plotly_js_path: Some("  ".to_string()),
            ..SimulationConfig::default()
        };
        match config.validate() {
            Err(PipelineError::InvalidConfig { key, .. }) => {
                assert_eq!(key, config_keys::PLOTLY_JS_PATH)
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let config =
            SimulationConfig::from_json_str(r#"{"plotly_js_path": "vendor/plotly.min.js"}"#)
                .unwrap();
        assert_eq!(config.plotly_js_path.as_deref(), Some("vendor/plotly.min.js"));
    }
}
