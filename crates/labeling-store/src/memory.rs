//! 内存存储
//!
//! 使用读写锁保护的向量实现，保留插入顺序，适用于开发和测试环境。
//! 进程退出后数据即丢失。

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{Result, StoreError};
use crate::traits::{RecordRepositoryTrait, RuleRepositoryTrait};
use labeling_engine::{ProcessedRecord, Rule};

/// 内存规则存储
#[derive(Debug, Default)]
pub struct MemoryRuleStore {
    rules: RwLock<Vec<Rule>>,
}

impl MemoryRuleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RuleRepositoryTrait for MemoryRuleStore {
    async fn list_rules(&self) -> Result<Vec<Rule>> {
        Ok(self.rules.read().clone())
    }

    async fn get_rule(&self, id: &str) -> Result<Option<Rule>> {
        Ok(self.rules.read().iter().find(|r| r.id == id).cloned())
    }

    async fn create_rule(&self, rule: Rule) -> Result<Rule> {
        self.rules.write().push(rule.clone());
        Ok(rule)
    }

    async fn update_rule(&self, rule: Rule) -> Result<Rule> {
        let mut rules = self.rules.write();
        // 原地替换，保持规则在集合中的插入位置
        match rules.iter_mut().find(|r| r.id == rule.id) {
            Some(existing) => {
                *existing = rule.clone();
                Ok(rule)
            }
            None => Err(StoreError::RuleNotFound(rule.id)),
        }
    }

    async fn delete_rule(&self, id: &str) -> Result<()> {
        let mut rules = self.rules.write();
        match rules.iter().position(|r| r.id == id) {
            Some(index) => {
                rules.remove(index);
                Ok(())
            }
            None => Err(StoreError::RuleNotFound(id.to_string())),
        }
    }
}

/// 内存记录存储（只追加）
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<ProcessedRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepositoryTrait for MemoryRecordStore {
    async fn list_records(&self) -> Result<Vec<ProcessedRecord>> {
        Ok(self.records.read().clone())
    }

    async fn append_record(&self, record: ProcessedRecord) -> Result<ProcessedRecord> {
        self.records.write().push(record.clone());
        Ok(record)
    }
}
