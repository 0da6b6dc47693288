//! API 响应信封
//!
//! 服务端每个成功响应都包一层 `{ data, message? }`；
//! 账单列表在 data 里再套一层分页信封。
//! 客户端统一转换为 `PaginatedResponse` 的 `data + meta` 形式。

use serde::{Deserialize, Serialize};

/// 标准响应信封
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 服务端分页信封 (位于 `data` 字段内)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    /// 空页时服务端可能省略 items
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub total_items: i64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// 客户端使用的分页元信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

/// 客户端使用的分页结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> From<PageEnvelope<T>> for PaginatedResponse<T> {
    fn from(envelope: PageEnvelope<T>) -> Self {
        Self {
            data: envelope.items,
            meta: PaginationMeta {
                current_page: envelope.page,
                page_size: envelope.page_size,
                total_items: envelope.total_items,
                total_pages: envelope.total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_data_and_message() {
        let body = r#"{"data": {"value": 1}, "message": "ok"}"#;
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Payload {
            value: i32,
        }
        let parsed: ApiResponse<Payload> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data, Payload { value: 1 });
        assert_eq!(parsed.message.as_deref(), Some("ok"));
    }

    #[test]
    fn envelope_message_is_optional() {
        let body = r#"{"data": [1, 2, 3]}"#;
        let parsed: ApiResponse<Vec<i32>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data, vec![1, 2, 3]);
        assert!(parsed.message.is_none());
    }

    #[test]
    fn page_envelope_maps_to_paginated_response() {
        let body = r#"{
            "data": {
                "items": ["a", "b"],
                "total_items": 42,
                "page": 2,
                "page_size": 10,
                "total_pages": 5
            }
        }"#;
        let parsed: ApiResponse<PageEnvelope<String>> = serde_json::from_str(body).unwrap();
        let result: PaginatedResponse<String> = parsed.data.into();

        assert_eq!(result.data, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(result.meta.current_page, 2);
        assert_eq!(result.meta.page_size, 10);
        assert_eq!(result.meta.total_items, 42);
        assert_eq!(result.meta.total_pages, 5);
    }

    #[test]
    fn missing_items_becomes_empty_page() {
        let body = r#"{"total_items": 0, "page": 1, "page_size": 10, "total_pages": 0}"#;
        let envelope: PageEnvelope<String> = serde_json::from_str(body).unwrap();
        let result: PaginatedResponse<String> = envelope.into();
        assert!(result.data.is_empty());
        assert_eq!(result.meta.total_items, 0);
    }
}
