//! 统计查询 API 处理器

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::instrument;

use labeling_engine::{StatisticsAggregator, StatisticsSnapshot};

use crate::dto::{ApiResponse, StatisticsQuery};
use crate::error::Result;
use crate::state::AppState;

/// 统计查询
///
/// GET /api/statistics?label=&from=&to=
///
/// 对全部已处理记录应用可选的日期/标签过滤后聚合，
/// 返回计数、占比和最近 10 条记录。
#[instrument(skip(state))]
pub async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<StatisticsQuery>,
) -> Result<Json<ApiResponse<StatisticsSnapshot>>> {
    let records = state.records.list_records().await?;
    let snapshot = StatisticsAggregator::aggregate(&records, &query.into_filter());

    Ok(Json(ApiResponse::success(snapshot)))
}
