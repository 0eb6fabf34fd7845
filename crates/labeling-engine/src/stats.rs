//! 统计聚合器
//!
//! 对已处理记录集合做过滤与汇总，产出计数、占比和最近记录视图。
//! 聚合是纯计算：输入记录快照，输出派生结果，不读写任何存储。

use crate::models::ProcessedRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// 最近记录视图的条数上限
const RECENT_ENTRIES_LIMIT: usize = 10;

/// 统计过滤条件（字段全部可选）
#[derive(Debug, Clone, Default)]
pub struct StatisticsFilter {
    /// 仅保留 labels 包含该标签的记录（精确匹配）
    pub label: Option<String>,
    /// createdAt 下界（含），缺省为 epoch
    pub from: Option<DateTime<Utc>>,
    /// createdAt 上界（含），缺省为聚合时刻
    pub to: Option<DateTime<Utc>>,
}

/// 统计快照（按需计算，不落库）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub total_processed: u64,
    pub label_counts: BTreeMap<String, u64>,
    pub label_percentages: BTreeMap<String, f64>,
    pub last_updated: DateTime<Utc>,
    pub recent_entries: Vec<ProcessedRecord>,
}

/// 统计聚合器
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// 聚合统计
    ///
    /// 先应用日期过滤再应用标签过滤。totalProcessed 为过滤后的
    /// 记录条数（不是标签出现次数）；labelCounts 只包含过滤后集合中
    /// 实际出现的标签，不补零。占比按「携带该标签的记录数」计算，
    /// 一条记录可携带多个标签，各占比之和不必等于 100。
    pub fn aggregate(records: &[ProcessedRecord], filter: &StatisticsFilter) -> StatisticsSnapshot {
        let from = filter.from.unwrap_or(DateTime::UNIX_EPOCH);
        let to = filter.to.unwrap_or_else(Utc::now);

        let mut filtered: Vec<&ProcessedRecord> = records
            .iter()
            .filter(|r| r.created_at >= from && r.created_at <= to)
            .collect();

        if let Some(label) = &filter.label {
            filtered.retain(|r| r.labels.iter().any(|l| l == label));
        }

        let total_processed = filtered.len() as u64;

        let mut label_counts: BTreeMap<String, u64> = BTreeMap::new();
        for record in &filtered {
            // 计数口径是「携带标签的记录数」，同一条记录内的重复标签只计一次
            let mut seen: Vec<&str> = Vec::new();
            for label in &record.labels {
                if !seen.contains(&label.as_str()) {
                    seen.push(label);
                    *label_counts.entry(label.clone()).or_insert(0) += 1;
                }
            }
        }

        let label_percentages: BTreeMap<String, f64> = label_counts
            .iter()
            .map(|(label, &count)| {
                let pct = if total_processed > 0 {
                    round2(count as f64 / total_processed as f64 * 100.0)
                } else {
                    0.0
                };
                (label.clone(), pct)
            })
            .collect();

        // 最近记录：按 createdAt 降序截取前 10 条
        filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let recent_entries: Vec<ProcessedRecord> = filtered
            .into_iter()
            .take(RECENT_ENTRIES_LIMIT)
            .cloned()
            .collect();

        StatisticsSnapshot {
            total_processed,
            label_counts,
            label_percentages,
            last_updated: Utc::now(),
            recent_entries,
        }
    }
}

/// 四舍五入到两位小数
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
