//! 请求 DTO 定义

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use validator::Validate;

use labeling_engine::{ConditionNode, StatisticsFilter};

/// 创建规则请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleRequest {
    #[validate(length(min = 1, max = 100, message = "名称长度需在 1-100 之间"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "标签长度需在 1-50 之间"))]
    pub label: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub conditions: ConditionNode,
}

fn default_priority() -> i32 {
    1
}

fn default_enabled() -> bool {
    true
}

/// 更新规则请求（字段全部可选，只更新给出的字段）
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleRequest {
    #[validate(length(min = 1, max = 100, message = "名称长度需在 1-100 之间"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "标签长度需在 1-50 之间"))]
    pub label: Option<String>,
    pub priority: Option<i32>,
    pub enabled: Option<bool>,
    pub conditions: Option<ConditionNode>,
}

/// 统计查询参数
///
/// from/to 接受 RFC 3339 或纯日期（YYYY-MM-DD，按当日零点）两种格式
#[derive(Debug, Default, Deserialize)]
pub struct StatisticsQuery {
    pub label: Option<String>,
    #[serde(default, deserialize_with = "de_flexible_datetime")]
    pub from: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_flexible_datetime")]
    pub to: Option<DateTime<Utc>>,
}

impl StatisticsQuery {
    /// 转换为引擎层的过滤条件
    pub fn into_filter(self) -> StatisticsFilter {
        StatisticsFilter {
            label: self.label,
            from: self.from,
            to: self.to,
        }
    }
}

/// 解析日期时间：先按 RFC 3339，再按纯日期
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap().and_utc());
    }

    Err(format!("无法解析日期时间: '{}'", s))
}

fn de_flexible_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_datetime(&s).map(Some).map_err(serde::de::Error::custom),
    }
}
