//! 浏览器跳转
//!
//! `LocationBridge` 的 web_sys 实现。401 强制跳转走整页加载，
//! 应用会以未认证状态重新启动。

use crate::api::LocationBridge;

pub struct BrowserLocation;

impl LocationBridge for BrowserLocation {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn assign(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().assign(url);
        }
    }
}
