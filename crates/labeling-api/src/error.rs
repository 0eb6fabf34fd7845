//! API 错误类型定义
//!
//! 包含 HTTP 层对引擎错误与存储错误的统一映射

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use labeling_engine::EngineError;
use labeling_store::StoreError;

/// API 错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // 验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),

    // 资源不存在
    #[error("规则不存在: {0}")]
    RuleNotFound(String),

    // 系统错误
    #[error("存储错误: {0}")]
    Store(String),
    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RuleNotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::RuleNotFound(_) => "RULE_NOT_FOUND",
            Self::Store(_) => "STORE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志，防止信息泄露
        let message = match &self {
            Self::Store(e) => {
                tracing::error!(error = %e, "存储操作失败");
                "服务内部错误，请稍后重试".to_string()
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
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

/// 从引擎错误转换：两类都属于调用方输入问题
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(msg) => Self::Validation(msg),
            EngineError::Json(e) => Self::Validation(e.to_string()),
        }
    }
}

/// 从存储错误转换
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::RuleNotFound(id) => Self::RuleNotFound(id),
            other => Self::Store(other.to_string()),
        }
    }
}

/// 从 validator 错误转换
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ApiError>;
