//! Postgres 存储
//!
//! 规则与记录以 JSONB 文档形式落库，列表查询按 (created_at, id)
//! 排序以保持插入顺序。启动时自动创建所需的表结构。

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::info;

use crate::error::{Result, StoreError};
use crate::traits::{RecordRepositoryTrait, RuleRepositoryTrait};
use labeling_engine::{ProcessedRecord, Rule};

/// 建立数据库连接池
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// 创建表结构（幂等）
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS labeling_rules (
            id TEXT PRIMARY KEY,
            doc JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS processed_records (
            id TEXT PRIMARY KEY,
            doc JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("数据库表结构就绪");
    Ok(())
}

/// Postgres 规则存储
#[derive(Clone)]
pub struct PgRuleStore {
    pool: PgPool,
}

impl PgRuleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RuleRepositoryTrait for PgRuleStore {
    async fn list_rules(&self) -> Result<Vec<Rule>> {
        let rows = sqlx::query("SELECT doc FROM labeling_rules ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await?;

        let mut rules = Vec::with_capacity(rows.len());
        for row in rows {
            let doc: serde_json::Value = row.try_get("doc")?;
            rules.push(serde_json::from_value(doc)?);
        }
        Ok(rules)
    }

    async fn get_rule(&self, id: &str) -> Result<Option<Rule>> {
        let row = sqlx::query("SELECT doc FROM labeling_rules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let doc: serde_json::Value = row.try_get("doc")?;
                Ok(Some(serde_json::from_value(doc)?))
            }
            None => Ok(None),
        }
    }

    async fn create_rule(&self, rule: Rule) -> Result<Rule> {
        sqlx::query("INSERT INTO labeling_rules (id, doc, created_at) VALUES ($1, $2, $3)")
            .bind(&rule.id)
            .bind(serde_json::to_value(&rule)?)
            .bind(rule.created_at)
            .execute(&self.pool)
            .await?;
        Ok(rule)
    }

    async fn update_rule(&self, rule: Rule) -> Result<Rule> {
        let result = sqlx::query("UPDATE labeling_rules SET doc = $2 WHERE id = $1")
            .bind(&rule.id)
            .bind(serde_json::to_value(&rule)?)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RuleNotFound(rule.id));
        }
        Ok(rule)
    }

    async fn delete_rule(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM labeling_rules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RuleNotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Postgres 记录存储（只追加）
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepositoryTrait for PgRecordStore {
    async fn list_records(&self) -> Result<Vec<ProcessedRecord>> {
        let rows =
            sqlx::query("SELECT doc FROM processed_records ORDER BY created_at ASC, id ASC")
                .fetch_all(&self.pool)
                .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let doc: serde_json::Value = row.try_get("doc")?;
            records.push(serde_json::from_value(doc)?);
        }
        Ok(records)
    }

    async fn append_record(&self, record: ProcessedRecord) -> Result<ProcessedRecord> {
        sqlx::query("INSERT INTO processed_records (id, doc, created_at) VALUES ($1, $2, $3)")
            .bind(&record.id)
            .bind(serde_json::to_value(&record)?)
            .bind(record.created_at)
            .execute(&self.pool)
            .await?;
        Ok(record)
    }
}
