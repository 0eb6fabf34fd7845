//! 数据打标引擎核心
//!
//! 提供纯函数形式的规则评估能力，支持：
//! - 条件树（单条件 / AND-OR 逻辑组）的 JSON 定义和解析
//! - 六种比较操作符的求值语义
//! - 按优先级排序的规则分类
//! - 已处理记录的统计聚合与过滤

pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod operators;
pub mod stats;
pub mod validator;

pub use classifier::Classifier;
pub use error::{EngineError, Result};
pub use evaluator::ConditionEvaluator;
pub use models::{
    Condition, ConditionGroup, ConditionNode, EvaluationContext, ProcessedRecord, Rule,
};
pub use operators::{ComparisonOperator, LogicalOperator};
pub use stats::{StatisticsAggregator, StatisticsFilter, StatisticsSnapshot};
pub use validator::validate_rule;
