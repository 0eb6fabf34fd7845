//! 条件评估器
//!
//! 实现六种比较操作符的求值语义。评估是全函数：字段缺失、
//! 数值解析失败一律返回 false，不产生错误，保证分类过程总能返回。

use crate::models::Condition;
use crate::operators::ComparisonOperator;
use serde_json::Value;

/// 条件评估器
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// 评估单个条件
    ///
    /// # Arguments
    /// * `field_value` - 从载荷中取出的字段值，字段缺失为 None
    /// * `condition` - 规则中定义的条件
    pub fn evaluate(field_value: Option<&Value>, condition: &Condition) -> bool {
        // 字段不存在时一律不匹配
        let field_value = match field_value {
            Some(v) => v,
            None => return false,
        };

        match condition.operator {
            ComparisonOperator::Eq => Self::text_eq(field_value, &condition.value),
            ComparisonOperator::Neq => !Self::text_eq(field_value, &condition.value),
            ComparisonOperator::Lt => Self::numeric(field_value, &condition.value, |a, b| a < b),
            ComparisonOperator::Gt => Self::numeric(field_value, &condition.value, |a, b| a > b),
            ComparisonOperator::Lte => Self::numeric(field_value, &condition.value, |a, b| a <= b),
            ComparisonOperator::Gte => Self::numeric(field_value, &condition.value, |a, b| a >= b),
        }
    }

    /// 相等比较：双方转为小写字符串后逐字符比较
    ///
    /// 数值相等本质上是字符串相等："2" 匹配 "2"，但不匹配 "2.0"
    fn text_eq(field: &Value, expected: &str) -> bool {
        Self::coerce_string(field).to_lowercase() == expected.to_lowercase()
    }

    /// 数值序比较：双方解析为 f64，任一侧解析失败则不匹配
    fn numeric<F>(field: &Value, expected: &str, cmp: F) -> bool
    where
        F: Fn(f64, f64) -> bool,
    {
        match (Self::field_as_f64(field), Self::parse_f64(expected)) {
            (Some(a), Some(b)) => cmp(a, b),
            _ => false,
        }
    }

    /// 按 JSON 语义把载荷字段值转为字符串
    fn coerce_string(value: &Value) -> String {
        match value {
            // 字符串取原文，避免 to_string 带上引号
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// 把载荷字段值解析为 f64
    fn field_as_f64(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => Self::parse_f64(s),
            _ => None,
        }
    }

    /// 解析字符串为浮点数；NaN 视为解析失败
    fn parse_f64(s: &str) -> Option<f64> {
        s.trim().parse::<f64>().ok().filter(|f| !f.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cond(op: ComparisonOperator, value: &str) -> Condition {
        Condition::new("Price", op, value)
    }

    #[test]
    fn test_missing_field_is_false_for_every_operator() {
        let operators = [
            ComparisonOperator::Eq,
            ComparisonOperator::Neq,
            ComparisonOperator::Lt,
            ComparisonOperator::Gt,
            ComparisonOperator::Lte,
            ComparisonOperator::Gte,
        ];

        for op in operators {
            assert!(
                !ConditionEvaluator::evaluate(None, &cond(op, "2")),
                "字段缺失时 {} 应返回 false",
                op
            );
        }
    }

    #[test]
    fn test_eq_is_string_based() {
        // "2" 匹配 "2"
        assert!(ConditionEvaluator::evaluate(
            Some(&json!("2")),
            &cond(ComparisonOperator::Eq, "2")
        ));

        // 字符串相等不是数值相等："2.0" 不匹配 "2"
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!("2.0")),
            &cond(ComparisonOperator::Eq, "2")
        ));
    }

    #[test]
    fn test_eq_case_insensitive() {
        let condition = Condition::new("CompanyName", ComparisonOperator::Eq, "Google");
        assert!(ConditionEvaluator::evaluate(
            Some(&json!("google")),
            &condition
        ));
        assert!(ConditionEvaluator::evaluate(
            Some(&json!("GOOGLE")),
            &condition
        ));
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!("Googles")),
            &condition
        ));
    }

    #[test]
    fn test_eq_coerces_non_string_payload_values() {
        // 数值载荷按 JSON 文本参与比较
        assert!(ConditionEvaluator::evaluate(
            Some(&json!(2)),
            &cond(ComparisonOperator::Eq, "2")
        ));
        // 布尔载荷同理
        assert!(ConditionEvaluator::evaluate(
            Some(&json!(true)),
            &Condition::new("InStock", ComparisonOperator::Eq, "true")
        ));
    }

    #[test]
    fn test_neq() {
        assert!(ConditionEvaluator::evaluate(
            Some(&json!("3")),
            &cond(ComparisonOperator::Neq, "2")
        ));
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!("2")),
            &cond(ComparisonOperator::Neq, "2")
        ));
    }

    #[test]
    fn test_numeric_comparisons() {
        assert!(ConditionEvaluator::evaluate(
            Some(&json!("1.2")),
            &cond(ComparisonOperator::Lt, "2.5")
        ));
        assert!(ConditionEvaluator::evaluate(
            Some(&json!(3)),
            &cond(ComparisonOperator::Gt, "2.5")
        ));
        assert!(ConditionEvaluator::evaluate(
            Some(&json!("2.5")),
            &cond(ComparisonOperator::Lte, "2.5")
        ));
        assert!(ConditionEvaluator::evaluate(
            Some(&json!("2.5")),
            &cond(ComparisonOperator::Gte, "2.5")
        ));
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!("2.5")),
            &cond(ComparisonOperator::Gt, "2.5")
        ));
    }

    #[test]
    fn test_unparsable_numeric_operand_is_false() {
        // 载荷侧解析失败
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!("abc")),
            &cond(ComparisonOperator::Lt, "2.5")
        ));
        // 规则侧解析失败
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!("1.2")),
            &cond(ComparisonOperator::Lt, "cheap")
        ));
        // NaN 字面量视为解析失败
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!("1.2")),
            &cond(ComparisonOperator::Lt, "NaN")
        ));
    }

    #[test]
    fn test_non_numeric_payload_types_fail_numeric_comparison() {
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!(true)),
            &cond(ComparisonOperator::Lt, "2.5")
        ));
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!(null)),
            &cond(ComparisonOperator::Lt, "2.5")
        ));
        assert!(!ConditionEvaluator::evaluate(
            Some(&json!([1, 2])),
            &cond(ComparisonOperator::Lt, "2.5")
        ));
    }

    #[test]
    fn test_numeric_payload_from_json_number() {
        let condition = cond(ComparisonOperator::Lt, "2.5");
        assert!(ConditionEvaluator::evaluate(Some(&json!(2)), &condition));
        assert!(!ConditionEvaluator::evaluate(Some(&json!(3)), &condition));
    }
}
