use std::time::Instant;

/// 阶段耗时 Guard：drop 时记录 elapsed_ms 与处理行数
///
/// 使用方式：
/// ```ignore
/// let _perf = machine_util_pareto::perf::PerfGuard::new("synthesize").with_rows(100);
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    rows: Option<usize>,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            rows: None,
            start: Instant::now(),
        }
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        match self.rows {
            Some(rows) => tracing::debug!(target: "perf", op = self.op, elapsed_ms, rows, "done"),
            None => tracing::debug!(target: "perf", op = self.op, elapsed_ms, "done"),
        }
    }
}
