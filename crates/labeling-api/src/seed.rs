//! 默认规则种子
//!
//! 规则存储为空时写入三条示例规则，首次启动即可演示完整的
//! 打标和统计流程。

use labeling_engine::{ComparisonOperator, Condition, ConditionGroup, ConditionNode, Rule};
use labeling_store::RuleRepositoryTrait;
use tracing::info;

fn condition(key: &str, op: ComparisonOperator, value: &str) -> ConditionNode {
    ConditionNode::Condition(Condition::new(key, op, value))
}

/// 内置示例规则
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "High Value Companies",
            "Green",
            3,
            ConditionNode::Group(ConditionGroup::or(vec![
                condition("CompanyName", ComparisonOperator::Eq, "Google"),
                ConditionNode::Group(ConditionGroup::and(vec![
                    condition("CompanyName", ComparisonOperator::Eq, "Amazon"),
                    condition("Price", ComparisonOperator::Lt, "2.5"),
                ])),
            ])),
        ),
        Rule::new(
            "Standard Price Products",
            "Orange",
            2,
            ConditionNode::Group(ConditionGroup::and(vec![condition(
                "Price",
                ComparisonOperator::Eq,
                "2",
            )])),
        ),
        Rule::new(
            "Low MOQ Budget Products",
            "Green",
            1,
            ConditionNode::Group(ConditionGroup::and(vec![
                condition("MOQ", ComparisonOperator::Lt, "100"),
                condition("Price", ComparisonOperator::Lt, "1.5"),
            ])),
        ),
    ]
}

/// 存储为空时写入默认规则
pub async fn seed_if_empty(repo: &dyn RuleRepositoryTrait) -> anyhow::Result<()> {
    if !repo.list_rules().await?.is_empty() {
        return Ok(());
    }

    let rules = default_rules();
    let count = rules.len();
    for rule in rules {
        repo.create_rule(rule).await?;
    }

    info!("已写入 {} 条默认规则", count);
    Ok(())
}
