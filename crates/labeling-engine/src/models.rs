//! 打标引擎领域模型

use crate::operators::{ComparisonOperator, LogicalOperator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// 条件树节点（单条件或逻辑组）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConditionNode {
    Condition(Condition),
    Group(ConditionGroup),
}

/// 叶子条件：字段、操作符、字面量
///
/// `key` 不要求在每条载荷中都存在，字段缺失是定义良好的不匹配。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub key: String,
    pub operator: ComparisonOperator,
    pub value: String,
}

impl Condition {
    pub fn new(
        key: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }
}

/// 逻辑组节点：AND/OR 组合任意深度的子树
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionGroup {
    pub operator: LogicalOperator,
    pub children: Vec<ConditionNode>,
}

impl ConditionGroup {
    pub fn new(operator: LogicalOperator, children: Vec<ConditionNode>) -> Self {
        Self { operator, children }
    }

    pub fn and(children: Vec<ConditionNode>) -> Self {
        Self::new(LogicalOperator::And, children)
    }

    pub fn or(children: Vec<ConditionNode>) -> Self {
        Self::new(LogicalOperator::Or, children)
    }
}

/// 打标规则
///
/// priority 不要求唯一，同优先级按创建顺序稳定排序。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub label: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub conditions: ConditionNode,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_priority() -> i32 {
    1
}

fn default_enabled() -> bool {
    true
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        priority: i32,
        conditions: ConditionNode,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            label: label.into(),
            priority,
            enabled: true,
            conditions,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

/// 评估上下文：一条待打标的 JSON 载荷
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    data: Value,
}

impl EvaluationContext {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// 从 JSON 字符串创建
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: Value = serde_json::from_str(json)?;
        Ok(Self { data })
    }

    /// 获取顶层字段值
    ///
    /// 载荷是扁平 JSON 对象，字段缺失返回 None（视为不匹配，不是错误）。
    pub fn get_field(&self, key: &str) -> Option<&Value> {
        self.data.as_object().and_then(|map| map.get(key))
    }

    /// 获取底层数据
    pub fn data(&self) -> &Value {
        &self.data
    }
}

/// 已处理记录：载荷 + 打标时命中的标签序列
///
/// 创建后不可变，集合只追加。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedRecord {
    pub id: String,
    pub payload: Value,
    pub labels: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl ProcessedRecord {
    pub fn new(payload: Value, labels: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            payload,
            labels,
            created_at: Utc::now(),
        }
    }
}
