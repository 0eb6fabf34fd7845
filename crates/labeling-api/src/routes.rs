//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{handlers, state::AppState};

/// 构建 /api 下的全部路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // 规则管理
        .route("/rules", get(handlers::rules::list_rules))
        .route("/rules", post(handlers::rules::create_rule))
        .route("/rules/{id}", put(handlers::rules::update_rule))
        .route("/rules/{id}", delete(handlers::rules::delete_rule))
        .route("/rules/{id}/toggle", post(handlers::rules::toggle_rule))
        // 载荷处理
        .route("/process", post(handlers::process::process_payload))
        .route("/test", post(handlers::process::test_payload))
        // 统计查询
        .route("/statistics", get(handlers::statistics::get_statistics))
}
