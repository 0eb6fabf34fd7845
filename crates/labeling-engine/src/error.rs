//! 引擎错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("规则校验失败: {0}")]
    Validation(String),

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
