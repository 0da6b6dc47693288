//! 共享 HTTP 客户端
//!
//! 所有资源服务都经由同一个 `ApiClient` 发请求：
//! - 存在令牌时自动附加 `Authorization: Bearer <token>`
//! - 收到 401 时清除本地凭据并强制跳转登录页（认证页面除外，避免循环）
//! - 其余错误按状态码归类后原样上抛，不做重试
//!
//! 传输、凭据存储和浏览器跳转都是注入的接口，
//! 浏览器实现在 `web` 模块，测试使用本模块的 Mock。

use std::collections::HashMap;
use std::rc::Rc;

use billdash_shared::error::{ApiError, ApiResult, ErrorBody};
use billdash_shared::HEADER_AUTHORIZATION;
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::logging;

#[cfg(test)]
use std::cell::RefCell;

#[cfg(test)]
pub mod tests;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::serialization(e.to_string()))
    }
}

/// HTTP 传输接口，浏览器实现基于 gloo-net fetch
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

/// 持久化凭据接口，浏览器实现基于 LocalStorage
pub trait CredentialStore {
    fn token(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// 浏览器跳转接口，401 强制回登录页时使用
pub trait LocationBridge {
    fn pathname(&self) -> String;
    fn assign(&self, url: &str);
}

// =========================================================
// 客户端
// =========================================================

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    credentials: Rc<dyn CredentialStore>,
    location: Rc<dyn LocationBridge>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Rc<dyn HttpTransport>,
        credentials: Rc<dyn CredentialStore>,
        location: Rc<dyn LocationBridge>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            credentials,
            location,
        }
    }

    pub fn credentials(&self) -> &Rc<dyn CredentialStore> {
        &self.credentials
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> ApiResult<HttpResponse> {
        let mut req = HttpRequest::new(&self.url(path), method);

        if let Some(token) = self.credentials.token() {
            req = req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }
        if let Some(body) = body {
            req = req
                .with_header("Content-Type", "application/json")
                .with_body(body);
        }

        let res = self.transport.send(req).await?;

        if res.status == 401 {
            self.handle_unauthorized();
            let detail = self.error_detail(&res, "Authentication required");
            return Err(ApiError::unauthorized(detail));
        }

        if !res.ok() {
            let detail = self.error_detail(&res, "Request failed");
            return Err(ApiError::from_status(res.status, detail));
        }

        Ok(res)
    }

    /// 会话失效：清凭据，认证页面之外强制回登录页
    fn handle_unauthorized(&self) {
        logging::warn("[Api] 401 received, clearing stored credentials.");
        self.credentials.clear();

        let path = self.location.pathname();
        if !path.contains("/login") && !path.contains("/register") {
            self.location.assign("/login");
        }
    }

    fn error_detail(&self, res: &HttpResponse, fallback: &str) -> String {
        serde_json::from_str::<ErrorBody>(&res.body)
            .unwrap_or_default()
            .detail(fallback)
    }

    // --- 按方法封装 ---

    pub async fn get(&self, path: &str) -> ApiResult<HttpResponse> {
        self.request(HttpMethod::Get, path, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<HttpResponse> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::serialization(e.to_string()))?;
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    /// 无请求体的 POST（登出等）
    pub async fn post_empty(&self, path: &str) -> ApiResult<HttpResponse> {
        self.request(HttpMethod::Post, path, None).await
    }

    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<HttpResponse> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::serialization(e.to_string()))?;
        self.request(HttpMethod::Put, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<HttpResponse> {
        self.request(HttpMethod::Delete, path, None).await
    }
}

// `ApiClient` holds `Rc<dyn …>` (single-threaded WASM), but leptos 0.8's
// `provide_context` requires `Send + Sync`. `SendWrapper` satisfies the bound
// without changing behavior: the value is only ever accessed on the WASM thread.
use leptos::__reexports::send_wrapper::SendWrapper;

pub fn provide_api(client: ApiClient) {
    provide_context(SendWrapper::new(client));
}

pub fn use_api() -> ApiClient {
    use_context::<SendWrapper<ApiClient>>()
        .expect("ApiClient should be provided")
        .take()
}

// =========================================================
// 测试工具: Mock 实现
// =========================================================

#[cfg(test)]
pub struct MockTransport {
    // URL -> (Status, Response Body)
    responses: RefCell<HashMap<String, (u16, String)>>,
    // 记录发出的请求，供断言使用
    pub requests: RefCell<Vec<HttpRequest>>,
}

#[cfg(test)]
impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_response(&self, url: &str, status: u16, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), (status, body.to_string()));
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .expect("at least one request should be recorded")
            .clone()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(req.clone());

        let responses = self.responses.borrow();
        if let Some((status, body)) = responses.get(&req.url) {
            Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            })
        } else {
            Ok(HttpResponse {
                status: 404,
                body: r#"{"success": false, "error": "Not Found"}"#.to_string(),
            })
        }
    }
}

#[cfg(test)]
pub struct MemoryCredentials {
    token: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryCredentials {
    pub fn empty() -> Self {
        Self {
            token: RefCell::new(None),
        }
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

#[cfg(test)]
impl CredentialStore for MemoryCredentials {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
pub struct RecordingLocation {
    pathname: RefCell<String>,
    pub assigned: RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingLocation {
    pub fn at(pathname: &str) -> Self {
        Self {
            pathname: RefCell::new(pathname.to_string()),
            assigned: RefCell::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl LocationBridge for RecordingLocation {
    fn pathname(&self) -> String {
        self.pathname.borrow().clone()
    }

    fn assign(&self, url: &str) {
        self.assigned.borrow_mut().push(url.to_string());
    }
}

/// 服务层测试用的客户端：带令牌，位于给定路径
#[cfg(test)]
pub fn test_client(pathname: &str) -> (Rc<MockTransport>, ApiClient) {
    let transport = Rc::new(MockTransport::new());
    let credentials = Rc::new(MemoryCredentials::with_token("test-token"));
    let location = Rc::new(RecordingLocation::at(pathname));
    let client = ApiClient::new(
        "http://api.test/api",
        transport.clone() as Rc<dyn HttpTransport>,
        credentials,
        location,
    );
    (transport, client)
}
