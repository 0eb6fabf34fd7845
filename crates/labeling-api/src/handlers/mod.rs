//! API 处理器模块

pub mod process;
pub mod rules;
pub mod statistics;
