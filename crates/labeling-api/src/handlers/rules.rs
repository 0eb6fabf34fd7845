//! 规则管理 API 处理器
//!
//! 规则的增删改查与启停切换。写操作在落库前执行两层校验：
//! validator 校验请求字段，引擎 validate_rule 校验条件树结构。

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use tracing::{info, instrument};
use validator::Validate;

use labeling_engine::{Rule, validate_rule};

use crate::dto::{ApiResponse, CreateRuleRequest, UpdateRuleRequest};
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// 规则列表
///
/// GET /api/rules
///
/// 按创建顺序返回全部规则（包括禁用的）。
#[instrument(skip(state))]
pub async fn list_rules(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Rule>>>> {
    let rules = state.rules.list_rules().await?;
    Ok(Json(ApiResponse::success(rules)))
}

/// 创建规则
///
/// POST /api/rules
#[instrument(skip(state, req))]
pub async fn create_rule(
    State(state): State<AppState>,
    Json(req): Json<CreateRuleRequest>,
) -> Result<Json<ApiResponse<Rule>>> {
    req.validate()?;

    let mut rule = Rule::new(req.name, req.label, req.priority, req.conditions);
    rule.enabled = req.enabled;

    // 保存前快速失败，拒绝结构非法的条件树
    validate_rule(&rule)?;

    let created = state.rules.create_rule(rule).await?;
    info!(rule_id = %created.id, label = %created.label, "规则已创建");

    Ok(Json(ApiResponse::success(created)))
}

/// 更新规则
///
/// PUT /api/rules/{id}
///
/// 只更新请求中给出的字段，任何更新都会刷新 updatedAt。
#[instrument(skip(state, req))]
pub async fn update_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRuleRequest>,
) -> Result<Json<ApiResponse<Rule>>> {
    req.validate()?;

    let mut rule = state
        .rules
        .get_rule(&id)
        .await?
        .ok_or_else(|| ApiError::RuleNotFound(id.clone()))?;

    if let Some(name) = req.name {
        rule.name = name;
    }
    if let Some(label) = req.label {
        rule.label = label;
    }
    if let Some(priority) = req.priority {
        rule.priority = priority;
    }
    if let Some(enabled) = req.enabled {
        rule.enabled = enabled;
    }
    if let Some(conditions) = req.conditions {
        rule.conditions = conditions;
    }
    rule.updated_at = Utc::now();

    validate_rule(&rule)?;

    let updated = state.rules.update_rule(rule).await?;
    info!(rule_id = %updated.id, "规则已更新");

    Ok(Json(ApiResponse::success(updated)))
}

/// 删除规则
///
/// DELETE /api/rules/{id}
#[instrument(skip(state))]
pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    state.rules.delete_rule(&id).await?;
    info!(rule_id = %id, "规则已删除");

    Ok(Json(ApiResponse::<()>::success_empty()))
}

/// 切换规则启停状态
///
/// POST /api/rules/{id}/toggle
#[instrument(skip(state))]
pub async fn toggle_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Rule>>> {
    let mut rule = state
        .rules
        .get_rule(&id)
        .await?
        .ok_or_else(|| ApiError::RuleNotFound(id.clone()))?;

    rule.enabled = !rule.enabled;
    rule.updated_at = Utc::now();

    let updated = state.rules.update_rule(rule).await?;
    info!(rule_id = %updated.id, enabled = updated.enabled, "规则状态已切换");

    Ok(Json(ApiResponse::success(updated)))
}
