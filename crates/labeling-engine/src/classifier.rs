//! 分类器
//!
//! 按优先级降序应用全部启用规则，收集命中标签。
//! 对固定的规则集和载荷，输出完全确定且无副作用，可安全地并发调用。

use crate::evaluator::ConditionEvaluator;
use crate::models::{ConditionNode, EvaluationContext, Rule};
use crate::operators::LogicalOperator;
use tracing::debug;

/// 规则分类器
pub struct Classifier;

impl Classifier {
    /// 评估单条规则（禁用的规则视为不匹配）
    pub fn evaluate_rule(ctx: &EvaluationContext, rule: &Rule) -> bool {
        if !rule.enabled {
            return false;
        }
        Self::evaluate_node(ctx, &rule.conditions)
    }

    /// 递归评估条件树（短路求值）
    ///
    /// 空组按折叠恒等元处理：AND 的空组恒为真，OR 的空组恒为假。
    /// 规则保存时的校验会拒绝空组，这里只在程序化构造的树上出现。
    pub fn evaluate_node(ctx: &EvaluationContext, node: &ConditionNode) -> bool {
        match node {
            ConditionNode::Condition(cond) => {
                ConditionEvaluator::evaluate(ctx.get_field(&cond.key), cond)
            }
            ConditionNode::Group(group) => match group.operator {
                LogicalOperator::And => {
                    group.children.iter().all(|c| Self::evaluate_node(ctx, c))
                }
                LogicalOperator::Or => group.children.iter().any(|c| Self::evaluate_node(ctx, c)),
            },
        }
    }

    /// 对载荷应用规则集，返回命中标签序列
    ///
    /// 先过滤出启用的规则，再按 priority 降序稳定排序
    /// （同优先级保持传入顺序），该顺序决定返回标签的顺序，
    /// 对调用方可见。所有规则都会被评估，没有首次命中即停的短路。
    pub fn classify(ctx: &EvaluationContext, rules: &[Rule]) -> Vec<String> {
        let mut enabled: Vec<&Rule> = rules.iter().filter(|r| r.enabled).collect();
        enabled.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut labels = Vec::new();
        for rule in enabled {
            if Self::evaluate_node(ctx, &rule.conditions) {
                debug!(rule_id = %rule.id, label = %rule.label, "规则命中");
                labels.push(rule.label.clone());
            }
        }

        labels
    }
}
