//! 响应 DTO 定义
//!
//! 所有 REST API 的响应体结构

use chrono::{DateTime, Utc};
use serde::Serialize;

/// API 统一响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: Some(data),
        }
    }

    /// 创建成功响应（无数据）
    pub fn success_empty() -> ApiResponse<()> {
        ApiResponse {
            success: true,
            code: "SUCCESS".to_string(),
            message: "操作成功".to_string(),
            data: None,
        }
    }
}

/// 载荷处理响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub id: String,
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// 规则试运行响应（不落库，因此没有记录 ID）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResponse {
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_shape() {
        let response = ApiResponse::success(vec!["Green".to_string()]);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"code\":\"SUCCESS\""));
        assert!(json.contains("\"data\":[\"Green\"]"));
    }

    #[test]
    fn test_empty_success_omits_data() {
        let response = ApiResponse::<()>::success_empty();
        let json = serde_json::to_string(&response).unwrap();

        // 无数据时省略 data 字段而不是输出 null
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn test_process_response_wire_format() {
        let response = ProcessResponse {
            id: "rec-1".to_string(),
            labels: vec!["Green".to_string(), "Orange".to_string()],
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"labels\":[\"Green\",\"Orange\"]"));
        assert!(json.contains("\"createdAt\""));
    }
}
