//! 载荷处理 API 处理器
//!
//! 分类本身是纯计算；读规则与写记录由本层在调用引擎前后完成。

use axum::{Json, extract::State};
use chrono::Utc;
use serde_json::Value;
use tracing::{info, instrument};

use labeling_engine::{Classifier, EvaluationContext, ProcessedRecord};

use crate::dto::{ApiResponse, ProcessResponse, TestResponse};
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// 处理载荷：分类并持久化
///
/// POST /api/process
#[instrument(skip(state, payload))]
pub async fn process_payload(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<ProcessResponse>>> {
    if !payload.is_object() {
        return Err(ApiError::Validation("载荷必须是 JSON 对象".to_string()));
    }

    let rules = state.rules.list_rules().await?;
    let ctx = EvaluationContext::new(payload.clone());
    let labels = Classifier::classify(&ctx, &rules);

    let record = ProcessedRecord::new(payload, labels);
    let stored = state.records.append_record(record).await?;

    info!(record_id = %stored.id, labels = ?stored.labels, "载荷已处理");

    Ok(Json(ApiResponse::success(ProcessResponse {
        id: stored.id,
        labels: stored.labels,
        created_at: stored.created_at,
    })))
}

/// 试运行：只分类不保存
///
/// POST /api/test
///
/// 用于规则调试，结果不进入统计。
#[instrument(skip(state, payload))]
pub async fn test_payload(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiResponse<TestResponse>>> {
    if !payload.is_object() {
        return Err(ApiError::Validation("载荷必须是 JSON 对象".to_string()));
    }

    let rules = state.rules.list_rules().await?;
    let ctx = EvaluationContext::new(payload);
    let labels = Classifier::classify(&ctx, &rules);

    Ok(Json(ApiResponse::success(TestResponse {
        labels,
        created_at: Utc::now(),
    })))
}
