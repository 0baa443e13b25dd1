// ==========================================
// 机组利用率分析 - 利用率合成器
// ==========================================
// 流程: sample_usage → derive_rates → attach_idle_share
// 每一步返回新的 Vec，不在原记录上追加列
// ==========================================

use crate::config::{config_keys, SimulationConfig};
use crate::domain::UtilizationRecord;
use crate::error::{PipelineError, PipelineResult};
use rand::Rng;
use rand_distr::{Distribution, Pareto};

/// 单台机组的原始抽样结果
#[derive(Debug, Clone, PartialEq)]
pub struct UsageSample {
    pub name: String,
    pub target_utilization_rate: f64,
    pub idle_hours: u32,
}

// ==========================================
// UtilizationSynthesizer - 利用率合成器
// ==========================================
pub struct UtilizationSynthesizer;

impl UtilizationSynthesizer {
    /// 合成利用率表
    ///
    /// # 参数
    /// - names: 机组名称（顺序即输出顺序）
    /// - config: 分布参数
    /// - rng: 与命名生成器共用的随机源
    ///
    /// # 返回
    /// - Err(ZeroIdleTotal): 非空输入且闲置小时合计为 0
    pub fn synthesize<R: Rng + ?Sized>(
        names: &[String],
        config: &SimulationConfig,
        rng: &mut R,
    ) -> PipelineResult<Vec<UtilizationRecord>> {
        let samples = Self::sample_usage(names, config, rng)?;
        let records = Self::derive_rates(&samples, config.total_hours);
        Self::attach_idle_share(&records)
    }

    /// 逐台抽样: 先目标利用率，再闲置小时
    ///
    /// 闲置小时 = trunc(Lomax(shape) × idle_scale + idle_floor)，
    /// Lomax 样本由标准 Pareto(scale=1) 样本减 1 得到
    pub fn sample_usage<R: Rng + ?Sized>(
        names: &[String],
        config: &SimulationConfig,
        rng: &mut R,
    ) -> PipelineResult<Vec<UsageSample>> {
        if config.target_rate_choices.is_empty() {
            return Err(PipelineError::invalid_config(
                config_keys::TARGET_RATE_CHOICES,
                "候选值不能为空",
            ));
        }

        let pareto = Pareto::new(1.0, config.pareto_shape)
            .map_err(|e| PipelineError::invalid_config(config_keys::PARETO_SHAPE, e.to_string()))?;

        let choices = &config.target_rate_choices;
        let floor = f64::from(config.idle_floor);

        let samples = names
            .iter()
            .map(|name| {
                let target = choices[rng.random_range(0..choices.len())];
                let lomax = pareto.sample(rng) - 1.0;
                let idle_hours = (lomax * config.idle_scale + floor) as u32;
                UsageSample {
                    name: name.clone(),
                    target_utilization_rate: target,
                    idle_hours,
                }
            })
            .collect();

        Ok(samples)
    }

    /// 计算利用小时与各项利用率（idle_share_pct 暂置 0）
    pub fn derive_rates(samples: &[UsageSample], total_hours: u32) -> Vec<UtilizationRecord> {
        let total = f64::from(total_hours);

        samples
            .iter()
            .map(|s| {
                // 闭区间截断 [0, total_hours]
                let utilized = (i64::from(total_hours) - i64::from(s.idle_hours))
                    .clamp(0, i64::from(total_hours)) as u32;
                let utilization_rate = f64::from(utilized) / total;
                let normalized = utilization_rate / s.target_utilization_rate;

                UtilizationRecord {
                    name: s.name.clone(),
                    target_utilization_rate: s.target_utilization_rate,
                    total_hours,
                    idle_hours: s.idle_hours,
                    utilized_hours: utilized,
                    utilization_rate,
                    normalized_utilization_rate: normalized,
                    under_utilization_rate_normalized: 1.0 - normalized,
                    idle_share_pct: 0.0,
                }
            })
            .collect()
    }

    /// 计算每台机组闲置小时占全局闲置小时的百分比
    pub fn attach_idle_share(
        records: &[UtilizationRecord],
    ) -> PipelineResult<Vec<UtilizationRecord>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let total_idle: u64 = records.iter().map(|r| u64::from(r.idle_hours)).sum();
        if total_idle == 0 {
            return Err(PipelineError::ZeroIdleTotal {
                rows: records.len(),
            });
        }

        let total_idle = total_idle as f64;
        Ok(records
            .iter()
            .map(|r| UtilizationRecord {
                idle_share_pct: f64::from(r.idle_hours) / total_idle * 100.0,
                ..r.clone()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rng::seeded_rng;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("M{:03}", i)).collect()
    }

    #[test]
    fn test_hours_invariants_hold() {
        let config = SimulationConfig::default();
        let mut rng = seeded_rng(42);
        let records = UtilizationSynthesizer::synthesize(&names(500), &config, &mut rng).unwrap();

        assert_eq!(records.len(), 500);
        for r in &records {
            assert!(r.idle_hours >= config.idle_floor);
            assert!(r.utilized_hours <= r.total_hours);
            assert!(config.target_rate_choices.contains(&r.target_utilization_rate));
        }
    }

    #[test]
    fn test_idle_share_sums_to_100() {
        let config = SimulationConfig::default();
        let mut rng = seeded_rng(3);
        let records = UtilizationSynthesizer::synthesize(&names(100), &config, &mut rng).unwrap();
        let sum: f64 = records.iter().map(|r| r.idle_share_pct).sum();
        assert!((sum - 100.0).abs() < 1e-6, "sum = {}", sum);
    }

    #[test]
    fn test_idle_over_total_clamps_to_zero() {
        let samples = vec![UsageSample {
            name: "Rex-Core".to_string(),
            target_utilization_rate: 0.5,
            idle_hours: 20_000,
        }];
        let records = UtilizationSynthesizer::derive_rates(&samples, 8760);
        assert_eq!(records[0].utilized_hours, 0);
        assert_eq!(records[0].utilization_rate, 0.0);
        // 归一化利用率不截断
        assert_eq!(records[0].under_utilization_rate_normalized, 1.0);
    }

    #[test]
    fn test_zero_scale_gives_floor() {
        let config = SimulationConfig {
            target_rate_choices: vec![0.5],
            idle_scale: 0.0,
            ..SimulationConfig::default()
        };
        let mut rng = seeded_rng(42);
        let records = UtilizationSynthesizer::synthesize(&names(4), &config, &mut rng).unwrap();

        for r in &records {
            assert_eq!(r.idle_hours, 50);
            assert_eq!(r.utilized_hours, 8710);
            assert!((r.utilization_rate - 0.994292).abs() < 1e-5);
            assert!((r.normalized_utilization_rate - 1.988584).abs() < 1e-5);
            assert!((r.under_utilization_rate_normalized + 0.988584).abs() < 1e-5);
            assert!((r.idle_share_pct - 25.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_idle_total_is_fatal() {
        let config = SimulationConfig {
            idle_floor: 0,
            idle_scale: 0.0,
            ..SimulationConfig::default()
        };
        let mut rng = seeded_rng(42);
        let result = UtilizationSynthesizer::synthesize(&names(3), &config, &mut rng);
        assert!(matches!(result, Err(PipelineError::ZeroIdleTotal { rows: 3 })));
    }

    #[test]
    fn test_empty_names_gives_empty_table() {
        let config = SimulationConfig::default();
        let mut rng = seeded_rng(42);
        let records = UtilizationSynthesizer::synthesize(&[], &config, &mut rng).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_attach_idle_share_does_not_touch_input() {
        let samples = vec![
            UsageSample {
                name: "A".to_string(),
                target_utilization_rate: 0.3,
                idle_hours: 100,
            },
            UsageSample {
                name: "B".to_string(),
                target_utilization_rate: 0.3,
                idle_hours: 300,
            },
        ];
        let base = UtilizationSynthesizer::derive_rates(&samples, 8760);
        let shared = UtilizationSynthesizer::attach_idle_share(&base).unwrap();

        assert_eq!(base[0].idle_share_pct, 0.0);
        assert!((shared[0].idle_share_pct - 25.0).abs() < 1e-9);
        assert!((shared[1].idle_share_pct - 75.0).abs() < 1e-9);
    }
}
