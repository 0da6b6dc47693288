//! 浏览器 HTTP 传输
//!
//! `HttpTransport` 的 gloo-net fetch 实现。
//! 传输层不关心状态码语义，把响应原样交回客户端归类。

use billdash_shared::error::{ApiError, ApiResult};
use gloo_net::http::Request;

use crate::api::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Put => Request::put(&req.url),
            HttpMethod::Delete => Request::delete(&req.url),
        };

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ApiError::network(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
