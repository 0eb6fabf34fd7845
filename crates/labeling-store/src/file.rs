//! 文件存储
//!
//! 每个集合对应一个 JSON 数组文件，按操作整读整写。文件缺失视为
//! 空集合，首次写入时自动创建数据目录。同一存储实例内的写操作
//! 通过互斥锁串行化，避免读改写竞争。

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::traits::{RecordRepositoryTrait, RuleRepositoryTrait};
use labeling_engine::{ProcessedRecord, Rule};

/// 读取 JSON 数组文件；文件不存在时返回空集合
async fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "存储文件不存在，按空集合处理");
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// 整体写回 JSON 数组文件，必要时创建父目录
async fn write_all<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec_pretty(items)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// 文件规则存储
pub struct FileRuleStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileRuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl RuleRepositoryTrait for FileRuleStore {
    async fn list_rules(&self) -> Result<Vec<Rule>> {
        read_all(&self.path).await
    }

    async fn get_rule(&self, id: &str) -> Result<Option<Rule>> {
        let rules: Vec<Rule> = read_all(&self.path).await?;
        Ok(rules.into_iter().find(|r| r.id == id))
    }

    async fn create_rule(&self, rule: Rule) -> Result<Rule> {
        let _guard = self.write_lock.lock().await;
        let mut rules: Vec<Rule> = read_all(&self.path).await?;
        rules.push(rule.clone());
        write_all(&self.path, &rules).await?;
        Ok(rule)
    }

    async fn update_rule(&self, rule: Rule) -> Result<Rule> {
        let _guard = self.write_lock.lock().await;
        let mut rules: Vec<Rule> = read_all(&self.path).await?;
        // 原地替换，保持文件中的插入顺序
        match rules.iter_mut().find(|r| r.id == rule.id) {
            Some(existing) => *existing = rule.clone(),
            None => return Err(StoreError::RuleNotFound(rule.id)),
        }
        write_all(&self.path, &rules).await?;
        Ok(rule)
    }

    async fn delete_rule(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut rules: Vec<Rule> = read_all(&self.path).await?;
        match rules.iter().position(|r| r.id == id) {
            Some(index) => {
                rules.remove(index);
            }
            None => return Err(StoreError::RuleNotFound(id.to_string())),
        }
        write_all(&self.path, &rules).await
    }
}

/// 文件记录存储（只追加）
pub struct FileRecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl RecordRepositoryTrait for FileRecordStore {
    async fn list_records(&self) -> Result<Vec<ProcessedRecord>> {
        read_all(&self.path).await
    }

    async fn append_record(&self, record: ProcessedRecord) -> Result<ProcessedRecord> {
        let _guard = self.write_lock.lock().await;
        let mut records: Vec<ProcessedRecord> = read_all(&self.path).await?;
        records.push(record.clone());
        write_all(&self.path, &records).await?;
        Ok(record)
    }
}
