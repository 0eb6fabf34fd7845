//! 仓储 Trait 定义
//!
//! 定义存储接口，便于调用方依赖抽象而非具体实现，支持 mock 测试。
//! 列表方法约定返回插入顺序，分类器依赖该顺序做同优先级的稳定排序。

use async_trait::async_trait;

use crate::error::Result;
use labeling_engine::{ProcessedRecord, Rule};

/// 规则仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuleRepositoryTrait: Send + Sync {
    /// 列出全部规则（插入顺序）
    async fn list_rules(&self) -> Result<Vec<Rule>>;
    async fn get_rule(&self, id: &str) -> Result<Option<Rule>>;
    async fn create_rule(&self, rule: Rule) -> Result<Rule>;
    /// 更新规则；规则不存在时返回 RuleNotFound
    async fn update_rule(&self, rule: Rule) -> Result<Rule>;
    /// 删除规则；规则不存在时返回 RuleNotFound
    async fn delete_rule(&self, id: &str) -> Result<()>;
}

/// 已处理记录仓储接口（只追加）
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepositoryTrait: Send + Sync {
    /// 列出全部记录（插入顺序）
    async fn list_records(&self) -> Result<Vec<ProcessedRecord>>;
    async fn append_record(&self, record: ProcessedRecord) -> Result<ProcessedRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use labeling_engine::{ComparisonOperator, Condition, ConditionNode};
    use std::sync::Arc;

    /// 仓储接口应能以 trait 对象形式注入调用方并被 mock
    #[tokio::test]
    async fn test_rule_repository_usable_as_trait_object() {
        let mut mock = MockRuleRepositoryTrait::new();
        mock.expect_list_rules().returning(|| {
            Ok(vec![Rule::new(
                "mocked",
                "Green",
                1,
                ConditionNode::Condition(Condition::new("Price", ComparisonOperator::Eq, "2")),
            )])
        });

        let repo: Arc<dyn RuleRepositoryTrait> = Arc::new(mock);
        let rules = repo.list_rules().await.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].label, "Green");
    }

    #[tokio::test]
    async fn test_record_repository_usable_as_trait_object() {
        let mut mock = MockRecordRepositoryTrait::new();
        mock.expect_list_records().returning(|| Ok(vec![]));

        let repo: Arc<dyn RecordRepositoryTrait> = Arc::new(mock);
        assert!(repo.list_records().await.unwrap().is_empty());
    }
}
