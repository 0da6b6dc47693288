//! 客户端错误类型
//!
//! 所有传输错误与状态码错误统一收敛到 `ApiError`，
//! 由查询层原样交给视图渲染。错误可 Clone，
//! 同一个失败可以分发给每个订阅该缓存键的读取方。

use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// 错误状态枚举
// =========================================================

/// 错误状态枚举，携带错误对应的语义（状态码）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorStatus {
    /// 请求未到达服务端（连接失败、构建失败等）
    Network,
    /// 401: 鉴权失败
    Unauthorized,
    /// 403: 无权访问
    Forbidden,
    /// 404: 资源未找到
    NotFound,
    /// 400: 业务校验失败
    InvalidInput,
    /// JSON 解析或序列化错误
    Serialization,
    /// 5xx: 服务端错误
    Server,
}

impl ApiErrorStatus {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiErrorStatus::Network => 0,
            ApiErrorStatus::InvalidInput | ApiErrorStatus::Serialization => 400,
            ApiErrorStatus::Unauthorized => 401,
            ApiErrorStatus::Forbidden => 403,
            ApiErrorStatus::NotFound => 404,
            ApiErrorStatus::Server => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorStatus::Network => "NETWORK_ERROR",
            ApiErrorStatus::InvalidInput => "INVALID_INPUT",
            ApiErrorStatus::Serialization => "JSON_PARSE_ERROR",
            ApiErrorStatus::Unauthorized => "UNAUTHORIZED",
            ApiErrorStatus::Forbidden => "FORBIDDEN",
            ApiErrorStatus::NotFound => "RESOURCE_NOT_FOUND",
            ApiErrorStatus::Server => "SERVER_ERROR",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub status: ApiErrorStatus,
    pub message: String,
}

impl ApiError {
    pub fn new(status: ApiErrorStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Network, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::NotFound, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::InvalidInput, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Serialization, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Server, message)
    }

    /// 按 HTTP 状态码归类
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 => ApiErrorStatus::InvalidInput,
            401 => ApiErrorStatus::Unauthorized,
            403 => ApiErrorStatus::Forbidden,
            404 => ApiErrorStatus::NotFound,
            _ => ApiErrorStatus::Server,
        };
        Self::new(kind, message)
    }

    // --- Accessors ---

    pub fn status_code(&self) -> u16 {
        self.status.status_code()
    }

    pub fn error_code(&self) -> &'static str {
        self.status.error_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// =========================================================
// 服务端错误体
// =========================================================

/// 服务端失败响应的 body 形如 `{ "success": false, "error": "..." }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// 取服务端给出的可读错误消息，两个字段都缺失时回退到默认值
    pub fn detail(&self, fallback: &str) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(
            ApiError::from_status(400, "bad").status,
            ApiErrorStatus::InvalidInput
        );
        assert_eq!(
            ApiError::from_status(401, "no").status,
            ApiErrorStatus::Unauthorized
        );
        assert_eq!(
            ApiError::from_status(403, "no").status,
            ApiErrorStatus::Forbidden
        );
        assert_eq!(
            ApiError::from_status(404, "gone").status,
            ApiErrorStatus::NotFound
        );
        assert_eq!(
            ApiError::from_status(500, "boom").status,
            ApiErrorStatus::Server
        );
        assert_eq!(
            ApiError::from_status(502, "boom").status,
            ApiErrorStatus::Server
        );
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = ApiError::not_found("Bill not found");
        assert_eq!(err.to_string(), "[RESOURCE_NOT_FOUND] Bill not found");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn error_body_prefers_error_field() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"success": false, "error": "Invalid bill ID"}"#).unwrap();
        assert_eq!(body.detail("fallback"), "Invalid bill ID");

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.detail("fallback"), "fallback");
    }
}
