//! 规则校验
//!
//! 在规则保存前快速失败，避免把规则编写错误掩盖成评估期的静默 false。
//! 校验只约束规则本身；载荷侧的缺字段、类型不符仍按评估语义返回不匹配。

use crate::error::{EngineError, Result};
use crate::models::{Condition, ConditionNode, Rule};

/// 校验规则结构
pub fn validate_rule(rule: &Rule) -> Result<()> {
    if rule.name.trim().is_empty() {
        return Err(EngineError::Validation("规则名称不能为空".to_string()));
    }

    if rule.label.trim().is_empty() {
        return Err(EngineError::Validation("规则标签不能为空".to_string()));
    }

    validate_node(&rule.conditions, "conditions")
}

/// 递归校验条件树节点
fn validate_node(node: &ConditionNode, path: &str) -> Result<()> {
    match node {
        ConditionNode::Condition(cond) => validate_condition(cond, path),
        ConditionNode::Group(group) => {
            if group.children.is_empty() {
                return Err(EngineError::Validation(format!(
                    "逻辑组 '{}' 不能为空",
                    path
                )));
            }

            for (i, child) in group.children.iter().enumerate() {
                let child_path = format!("{}.children[{}]", path, i);
                validate_node(child, &child_path)?;
            }

            Ok(())
        }
    }
}

/// 校验叶子条件
fn validate_condition(cond: &Condition, path: &str) -> Result<()> {
    if cond.key.trim().is_empty() {
        return Err(EngineError::Validation(format!(
            "条件 '{}' 的字段名不能为空",
            path
        )));
    }

    // 数值比较要求规则侧字面量本身可解析，
    // 否则该条件对任何载荷恒为 false，多半是录入错误
    if cond.operator.is_numeric() {
        match cond.value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => {}
            _ => {
                return Err(EngineError::Validation(format!(
                    "条件 '{}' 的 {} 操作符需要数值字面量，当前为 '{}'",
                    path, cond.operator, cond.value
                )));
            }
        }
    }

    Ok(())
}
