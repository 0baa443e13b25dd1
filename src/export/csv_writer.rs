// ==========================================
// 机组利用率分析 - CSV 导出
// ==========================================
// 输出: 原始快照，每台机组一行，表头与 UtilizationRecord 序列化列名一致
// ==========================================

use crate::domain::UtilizationRecord;
use crate::error::PipelineResult;
use crate::export::atomic::write_atomically;
use csv::WriterBuilder;
use std::path::Path;

// CSV 表头
pub const CSV_HEADER: &[&str] = &[
    "machine_name",
    "target_util_rate",
    "total_hours_year",
    "idle_hours_year",
    "utilized_hours_year",
    "utilization_rate",
    "utilization_rate_normalized",
    "under_utilized_rate_normalized",
    "total_idle_pct",
];

/// 将记录写入任意 writer（带表头）
pub fn write_records<W: std::io::Write>(
    writer: W,
    records: &[UtilizationRecord],
) -> PipelineResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    // 显式写表头，空表也保留列名
    wtr.write_record(CSV_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// 原子写出 CSV 文件，覆盖已有文件
pub fn write_records_csv(path: &Path, records: &[UtilizationRecord]) -> PipelineResult<()> {
    write_atomically(path, |file| write_records(file, records))?;
    tracing::info!(path = %path.display(), rows = records.len(), "CSV 导出完成");
    Ok(())
}
