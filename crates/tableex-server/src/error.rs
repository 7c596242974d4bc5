//! 服务错误类型定义
//!
//! 包含表格操作、模板渲染等服务特有的错误类型

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tableex_shared::error::TableexError;

/// 服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    // 表格操作错误
    #[error("列索引越界: {index}，共 {columns} 列")]
    ColumnOutOfRange { index: usize, columns: usize },
    #[error("单元格越界: ({row}, {column})，表格为 {rows} 行 x {columns} 列")]
    CellOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    // 验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    // 系统错误
    #[error("模板渲染失败: {0}")]
    Template(#[from] tera::Error),
    #[error(transparent)]
    Core(#[from] TableexError),
}

impl ServerError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ColumnOutOfRange { .. } | Self::CellOutOfRange { .. } | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Core(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Template(_) | Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnOutOfRange { .. } => "COLUMN_OUT_OF_RANGE",
            Self::CellOutOfRange { .. } => "CELL_OUT_OF_RANGE",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Template(_) => "TEMPLATE_ERROR",
            Self::Core(e) => e.code(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        let message = if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "请求处理失败");
            "服务内部错误，请稍后重试".to_string()
        } else {
            self.to_string()
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
            "data": serde_json::Value::Null
        });

        (status, axum::Json(body)).into_response()
    }
}

/// 请求体解析失败统一按参数验证错误返回
impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
