//! 存储层
//!
//! 定义规则与已处理记录的仓储接口，并提供三种可互换的后端实现：
//! 内存、JSON 文件、Postgres。引擎与 API 层只依赖接口，不依赖具体后端。

pub mod error;
pub mod file;
pub mod memory;
pub mod postgres;
pub mod traits;

pub use error::{Result, StoreError};
pub use file::{FileRecordStore, FileRuleStore};
pub use memory::{MemoryRecordStore, MemoryRuleStore};
pub use postgres::{PgRecordStore, PgRuleStore, connect, ensure_schema};
pub use traits::{RecordRepositoryTrait, RuleRepositoryTrait};
