// ==========================================
// 机组利用率分析 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 任何错误都会中止整次运行，不做部分恢复
// ==========================================

use thiserror::Error;

/// 流水线错误类型
#[derive(Error, Debug)]
pub enum PipelineError {
    // ===== 配置错误 =====
    #[error("配置值无效 (key: {key}): {message}")]
    InvalidConfig { key: String, message: String },

    // ===== 致命计算错误 =====
    /// 热力图需要方阵：机组数量必须等于 grid_size²
    #[error(
        "机组数量必须为 {required} 才能构成 {grid_size}x{grid_size} 方阵热力图（实际 {actual}）"
    )]
    NonSquareGrid {
        grid_size: usize,
        required: usize,
        actual: usize,
    },

    /// 全局闲置小时合计为 0，无法计算占比
    #[error("闲置小时合计为 0，无法计算闲置占比 (行数: {rows})")]
    ZeroIdleTotal { rows: usize },

    // ===== 输出错误 =====
    #[error("文件写入失败: {0}")]
    Io(String),

    #[error("CSV 写入失败: {0}")]
    Csv(String),

    #[error("JSON 序列化失败: {0}")]
    Json(String),

    #[error("文件原子替换失败 ({path}): {message}")]
    Persist { path: String, message: String },

    #[error("HTML 模板渲染失败: {0}")]
    Render(String),
}

impl PipelineError {
    pub fn invalid_config(key: &str, message: impl Into<String>) -> Self {
        PipelineError::InvalidConfig {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Io(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::Csv(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Json(err.to_string())
    }
}

// 实现 From<askama::Error>
impl From<askama::Error> for PipelineError {
    fn from(err: askama::Error) -> Self {
        PipelineError::Render(err.to_string())
    }
}

/// Result 类型别名
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_square_message_names_required_count() {
        let err = PipelineError::NonSquareGrid {
            grid_size: 10,
            required: 100,
            actual: 99,
        };
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("10x10"));
        assert!(msg.contains("99"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PipelineError = io.into();
        assert!(matches!(err, PipelineError::Io(_)));
    }
}
