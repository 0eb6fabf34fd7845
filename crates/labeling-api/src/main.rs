//! 数据打标服务
//!
//! 提供规则配置、载荷打标和统计查询的 REST API。

use std::sync::Arc;

use axum::{Json, Router, http::HeaderValue, routing::get};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use labeling_api::{routes, seed, state::AppState};
use labeling_shared::config::{AppConfig, StorageBackend};
use labeling_shared::observability;
use labeling_store::{
    FileRecordStore, FileRuleStore, MemoryRecordStore, MemoryRuleStore, PgRecordStore, PgRuleStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("labeling-api").unwrap_or_default();
    observability::init(&config.observability)?;

    info!("Starting labeling-api on {}", config.server_addr());

    let state = build_state(&config).await?;

    // 空存储时写入默认示例规则
    seed::seed_if_empty(state.rules.as_ref()).await?;

    // CORS 配置：通过 LABELING_CORS_ORIGINS 环境变量控制允许的来源，
    // 多个来源用逗号分隔
    let allowed_origins =
        std::env::var("LABELING_CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let cors = if allowed_origins == "*" {
        if config.is_production() {
            warn!("LABELING_CORS_ORIGINS=\"*\" 在生产环境中不安全，请设置为具体域名");
        }
        info!("CORS allowed_origins: * (all origins)");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        info!("CORS allowed_origins: {}", allowed_origins);
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse::<HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = Router::new()
        .nest("/api", routes::api_routes())
        .route(
            "/health",
            get({
                let health_state = state.clone();
                move || health_check(health_state.clone())
            }),
        )
        .layer(cors)
        // 请求级访问日志
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    // 优雅关闭：收到 SIGTERM 或 Ctrl+C 时停止接收新连接，
    // 等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// 按配置选择存储后端并构造应用状态
async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let state = match config.storage.backend {
        StorageBackend::Memory => {
            info!("使用内存存储后端");
            AppState::new(
                Arc::new(MemoryRuleStore::new()),
                Arc::new(MemoryRecordStore::new()),
            )
        }
        StorageBackend::File => {
            let dir = std::path::PathBuf::from(&config.storage.data_dir);
            info!("使用文件存储后端: {}", dir.display());
            AppState::new(
                Arc::new(FileRuleStore::new(dir.join("rules.json"))),
                Arc::new(FileRecordStore::new(dir.join("processed_records.json"))),
            )
        }
        StorageBackend::Postgres => {
            info!("使用 Postgres 存储后端");
            let pool = labeling_store::connect(
                &config.storage.database_url,
                config.storage.max_connections,
            )
            .await?;
            labeling_store::ensure_schema(&pool).await?;
            AppState::new(
                Arc::new(PgRuleStore::new(pool.clone())),
                Arc::new(PgRecordStore::new(pool)),
            )
        }
    };

    Ok(state)
}

/// 存活探针：报告服务名与存储计数
async fn health_check(state: AppState) -> Json<serde_json::Value> {
    let rules_count = state.rules.list_rules().await.map(|r| r.len()).unwrap_or(0);
    let records_count = state
        .records
        .list_records()
        .await
        .map(|r| r.len())
        .unwrap_or(0);

    Json(serde_json::json!({
        "status": "ok",
        "service": "labeling-api",
        "rulesCount": rules_count,
        "processedCount": records_count
    }))
}

/// 监听关闭信号
///
/// K8s 通过 SIGTERM 通知 Pod 停止；本地开发通过 Ctrl+C。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
