//! 统一错误处理模块
//!
//! 定义配置与表格生成阶段共享的错误类型，使用 thiserror 提供良好的错误信息。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum TableexError {
    // ==================== 表格维度错误 ====================
    #[error("无效的表格维度: {field}={value}，必须大于 0")]
    InvalidDimension { field: &'static str, value: usize },

    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, TableexError>;

impl TableexError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDimension { .. } => "INVALID_DIMENSION",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// 是否由调用方输入引起（而非系统内部故障）
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidDimension { .. })
    }
}
