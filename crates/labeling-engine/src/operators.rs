//! 规则操作符定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 条件比较操作符
///
/// 线上格式为六个符号字面量：`=` `!=` `<` `>` `<=` `>=`。
/// 枚举在反序列化时即闭合，不存在"未知操作符"的运行期分支。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = ">=")]
    Gte,
}

impl ComparisonOperator {
    /// 是否为数值序比较（要求双方都能解析为浮点数）
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Lt | Self::Gt | Self::Lte | Self::Gte)
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Lte => "<=",
            Self::Gte => ">=",
        };
        write!(f, "{}", s)
    }
}

/// 逻辑组合操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    And,
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
        }
    }
}
