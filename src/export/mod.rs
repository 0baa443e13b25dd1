// ==========================================
// 机组利用率分析 - 导出层
// ==========================================
// 职责: 原始快照 CSV、图表 HTML 的落盘
// 约定: 每个文件原子替换
// ==========================================

pub mod atomic;
pub mod csv_writer;
pub mod html_writer;

pub use csv_writer::{write_records, write_records_csv, CSV_HEADER};
pub use html_writer::write_html;
