//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use labeling_store::{RecordRepositoryTrait, RuleRepositoryTrait};

/// Axum 应用共享状态
///
/// 持有规则与记录仓储的 trait 对象，handler 只依赖存储接口，
/// 后端在启动时按配置注入。
#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<dyn RuleRepositoryTrait>,
    pub records: Arc<dyn RecordRepositoryTrait>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(
        rules: Arc<dyn RuleRepositoryTrait>,
        records: Arc<dyn RecordRepositoryTrait>,
    ) -> Self {
        Self { rules, records }
    }
}
