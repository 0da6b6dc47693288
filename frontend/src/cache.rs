//! 查询缓存
//!
//! 数据访问钩子构建在这层之上：读取按键缓存、按时效重验、
//! 并发同键请求去重；写入成功后按前缀失效相关条目。
//!
//! 存储本体 `CacheStore` 不含任何响应式依赖，时间由调用方传入，
//! 可以直接单元测试；`QueryClient` 在其上包一个代次信号，
//! 失效、写入、清空都会推进代次，订阅方据此重读。

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use billdash_shared::error::ApiError;
use chrono::Utc;
use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::logging;

#[cfg(test)]
mod tests;

/// 默认时效：30 秒内的缓存视为新鲜
pub const DEFAULT_STALE_TIME_MS: i64 = 30_000;

// =========================================================
// 缓存键
// =========================================================

/// 有序字符串元组，前缀匹配驱动失效
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// 追加一段（数字、ID 等动态参数）
    pub fn with(mut self, segment: impl ToString) -> Self {
        self.0.push(segment.to_string());
        self
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0.iter().zip(&prefix.0).all(|(a, b)| a == b)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

// =========================================================
// 非响应式存储
// =========================================================

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Option<Value>,
    updated_at_ms: i64,
    stale: bool,
    in_flight: bool,
    error: Option<ApiError>,
}

impl CacheEntry {
    fn empty() -> Self {
        Self {
            value: None,
            updated_at_ms: 0,
            stale: false,
            in_flight: false,
            error: None,
        }
    }
}

/// 一次读取的归类结果
#[derive(Debug, Clone, PartialEq)]
pub enum ReadState {
    /// 有值且在时效内
    Fresh(Value),
    /// 有值但需要后台重验
    Stale(Value),
    /// 无此条目
    Miss,
    /// 请求在途且尚无可用值
    InFlight,
    /// 上次请求失败；失效前不再发起请求
    Failed(ApiError),
}

#[derive(Default)]
pub struct CacheStore {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, key: &QueryKey, stale_time_ms: i64, now_ms: i64) -> ReadState {
        let Some(entry) = self.entries.get(key) else {
            return ReadState::Miss;
        };
        if let Some(err) = &entry.error {
            return ReadState::Failed(err.clone());
        }
        if let Some(value) = &entry.value {
            if entry.stale || now_ms - entry.updated_at_ms >= stale_time_ms {
                return ReadState::Stale(value.clone());
            }
            return ReadState::Fresh(value.clone());
        }
        if entry.in_flight {
            ReadState::InFlight
        } else {
            ReadState::Miss
        }
    }

    /// 占用在途标记；已有同键请求在途时返回 false
    pub fn begin_fetch(&mut self, key: &QueryKey) -> bool {
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(CacheEntry::empty);
        if entry.in_flight {
            return false;
        }
        entry.in_flight = true;
        true
    }

    /// 写入新值，条目回到新鲜状态
    pub fn insert(&mut self, key: &QueryKey, value: Value, now_ms: i64) {
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(CacheEntry::empty);
        entry.value = Some(value);
        entry.updated_at_ms = now_ms;
        entry.stale = false;
        entry.in_flight = false;
        entry.error = None;
    }

    /// 记录失败；保留旧值，条目停在 Failed 直到被失效
    pub fn fail(&mut self, key: &QueryKey, error: ApiError) {
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(CacheEntry::empty);
        entry.in_flight = false;
        entry.error = Some(error);
    }

    /// 将前缀命中的条目标记为过期并清除失败状态，返回命中数
    pub fn invalidate_prefix(&mut self, prefix: &QueryKey) -> usize {
        let mut count = 0;
        for (key, entry) in self.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.stale = true;
                entry.error = None;
                count += 1;
            }
        }
        count
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =========================================================
// 响应式外层
// =========================================================

/// 查询缓存客户端
///
/// 所有订阅方共享同一个存储；代次信号在每次写入后推进，
/// 让依赖缓存的 Effect 重新读取。
#[derive(Clone, Copy)]
pub struct QueryClient {
    store: StoredValue<Rc<RefCell<CacheStore>>, LocalStorage>,
    version: RwSignal<u64>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            store: StoredValue::new_local(Rc::new(RefCell::new(CacheStore::new()))),
            version: RwSignal::new(0),
        }
    }

    fn now_ms() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// 订阅缓存代次；代次变化时当前 Effect 会重跑
    pub fn track(&self) {
        self.version.track();
    }

    fn notify(&self) {
        self.version.update(|v| *v += 1);
    }

    pub fn read(&self, key: &QueryKey, stale_time_ms: i64) -> ReadState {
        self.store
            .with_value(|s| s.borrow().read(key, stale_time_ms, Self::now_ms()))
    }

    pub(crate) fn begin_fetch(&self, key: &QueryKey) -> bool {
        self.store.with_value(|s| s.borrow_mut().begin_fetch(key))
    }

    pub(crate) fn complete_ok(&self, key: &QueryKey, value: Value) {
        self.store
            .with_value(|s| s.borrow_mut().insert(key, value, Self::now_ms()));
        self.notify();
    }

    pub(crate) fn complete_err(&self, key: &QueryKey, error: ApiError) {
        self.store.with_value(|s| s.borrow_mut().fail(key, error));
        self.notify();
    }

    /// 按前缀失效；后续读取会触发重新拉取
    pub fn invalidate(&self, prefix: &QueryKey) {
        let count = self
            .store
            .with_value(|s| s.borrow_mut().invalidate_prefix(prefix));
        logging::log(&format!("[Cache] invalidate {}: {} entries", prefix, count));
        self.notify();
    }

    /// 直接写入条目（变更响应回填等场景）
    pub fn set_query_data<T: Serialize>(&self, key: &QueryKey, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.store
                    .with_value(|s| s.borrow_mut().insert(key, json, Self::now_ms()));
                self.notify();
            }
            Err(e) => logging::warn(&format!("[Cache] set_query_data {}: {}", key, e)),
        }
    }

    /// 清空全部条目（登出）
    pub fn clear(&self) {
        self.store.with_value(|s| s.borrow_mut().clear());
        self.notify();
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_query_client() -> QueryClient {
    let client = QueryClient::new();
    provide_context(client);
    client
}

/// 从 Context 获取查询缓存客户端
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient should be provided")
}
