//! 打标服务 HTTP 层
//!
//! 提供规则管理、载荷处理和统计查询的 REST API。

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod state;
