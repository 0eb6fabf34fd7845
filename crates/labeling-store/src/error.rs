//! 存储层错误类型

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("规则未找到: {0}")]
    RuleNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
