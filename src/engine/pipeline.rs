// ==========================================
// 机组利用率分析 - 流水线编排
// ==========================================
// 顺序: 播种 → 命名 → 合成 → 原始快照 → 帕累托视图 / 热力图视图
// 红线: 本模块不做任何文件 IO
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::{HeatmapGrid, ParetoView, UtilizationRecord};
use crate::engine::heatmap_view::build_heatmap_view;
use crate::engine::name_generator::{GeneratedNames, NameGenerator};
use crate::engine::pareto_view::build_pareto_view;
use crate::engine::rng::seeded_rng;
use crate::engine::utilization::UtilizationSynthesizer;
use crate::error::PipelineResult;
use crate::perf::PerfGuard;

/// 流水线输出
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// 命名结果（含组合池是否耗尽）
    pub names: GeneratedNames,

    /// 原始快照，用于 CSV 导出
    pub raw: Vec<UtilizationRecord>,

    /// 帕累托图视图
    pub pareto: ParetoView,

    /// 热力图视图
    pub heatmap: HeatmapGrid,
}

// ==========================================
// UtilizationPipeline - 流水线
// ==========================================
pub struct UtilizationPipeline {
    config: SimulationConfig,
    name_generator: NameGenerator,
}

impl UtilizationPipeline {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            name_generator: NameGenerator::new(),
        }
    }

    /// 替换命名生成器（自定义词表）
    pub fn with_name_generator(mut self, name_generator: NameGenerator) -> Self {
        self.name_generator = name_generator;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// 执行流水线
    ///
    /// 同一随机源先用于命名洗牌，再按机组顺序抽取目标利用率与闲置小时。
    pub fn run(&self) -> PipelineResult<PipelineOutput> {
        self.config.validate()?;
        let mut rng = seeded_rng(self.config.seed);

        let names = {
            let _perf = PerfGuard::new("generate_names").with_rows(self.config.machine_count);
            self.name_generator
                .generate_names(&mut rng, self.config.machine_count)
        };
        tracing::info!(
            machines = names.names.len(),
            pool_size = names.pool_size,
            exhausted = names.exhausted,
            "机组名称已生成"
        );

        let raw = {
            let _perf = PerfGuard::new("synthesize").with_rows(names.names.len());
            UtilizationSynthesizer::synthesize(&names.names, &self.config, &mut rng)?
        };
        let total_idle: u64 = raw.iter().map(|r| u64::from(r.idle_hours)).sum();
        tracing::info!(rows = raw.len(), total_idle, "利用率数据合成完成");

        let pareto = {
            let _perf = PerfGuard::new("pareto_view").with_rows(raw.len());
            build_pareto_view(&raw)?
        };

        let heatmap = {
            let _perf = PerfGuard::new("heatmap_view").with_rows(raw.len());
            build_heatmap_view(&raw, self.config.grid_size)?
        };

        Ok(PipelineOutput {
            names,
            raw,
            pareto,
            heatmap,
        })
    }
}
