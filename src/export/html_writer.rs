// ==========================================
// 机组利用率分析 - HTML 导出
// ==========================================
// 输出: 渲染好的完整文档，原子替换已有文件
// ==========================================

use crate::error::PipelineResult;
use crate::export::atomic::write_atomically;
use std::io::Write;
use std::path::Path;

/// 原子写出 HTML 文档，覆盖已有文件
pub fn write_html(path: &Path, html: &str) -> PipelineResult<()> {
    write_atomically(path, |file| {
        file.write_all(html.as_bytes())?;
        Ok(())
    })?;
    tracing::info!(path = %path.display(), bytes = html.len(), "图表文档写出完成");
    Ok(())
}
