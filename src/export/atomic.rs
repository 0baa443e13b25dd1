// ==========================================
// 机组利用率分析 - 原子写文件
// ==========================================
// 先写入目标目录下的临时文件，再 rename 覆盖目标
// 失败时目标文件保持原样
// ==========================================

use crate::error::{PipelineError, PipelineResult};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// 在目标目录创建临时文件，交给 write 填充后原子替换目标文件
pub fn write_atomically<F>(path: &Path, write: F) -> PipelineResult<()>
where
    F: FnOnce(&mut NamedTempFile) -> PipelineResult<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    write(&mut tmp)?;
    tmp.as_file_mut().flush()?;
    tmp.as_file().sync_all()?;
    // 报错指向目标文件，而不是已被删除的临时文件
    tmp.persist(path).map_err(|e| PipelineError::Persist {
        path: path.display().to_string(),
        message: e.error.to_string(),
    })?;

    tracing::debug!(path = %path.display(), "文件已写入");
    Ok(())
}
