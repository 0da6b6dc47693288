//! 数据访问钩子
//!
//! 读取钩子把缓存键绑定到一个拉取函数；缓存层负责时效、
//! 在途去重与按前缀失效。写入钩子在成功回调里先做失效，
//! 再由调用方执行导航等副作用。

use std::future::Future;
use std::rc::Rc;

use billdash_shared::error::{ApiError, ApiResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache::{use_query_client, QueryKey, ReadState, DEFAULT_STALE_TIME_MS};

pub mod auth;
pub mod bills;
pub mod categories;
pub mod dashboard;
pub mod users;
pub mod vendors;

// =========================================================
// 读取
// =========================================================

#[derive(Clone, Copy)]
pub struct QueryOptions {
    pub stale_time_ms: i64,
    /// None 表示始终启用
    pub enabled: Option<Signal<bool>>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            stale_time_ms: DEFAULT_STALE_TIME_MS,
            enabled: None,
        }
    }
}

impl QueryOptions {
    pub fn stale_time(mut self, ms: i64) -> Self {
        self.stale_time_ms = ms;
        self
    }

    pub fn enabled(mut self, signal: Signal<bool>) -> Self {
        self.enabled = Some(signal);
        self
    }
}

/// 读取钩子暴露给视图的状态
#[derive(Clone, Copy)]
pub struct QueryResult<T: Send + Sync + 'static> {
    pub data: Signal<Option<T>>,
    pub error: Signal<Option<ApiError>>,
    pub is_loading: Signal<bool>,
}

/// 把缓存键绑定到拉取函数
///
/// 命中新鲜值直接出缓存；过期值先出缓存再后台重验；
/// 未命中时发起请求，同键并发只有一个真正在途。
/// 失败条目不自动重试，失效之前读取方只会看到错误。
pub fn use_query<T, Fut>(
    key: impl Fn() -> QueryKey + 'static,
    fetcher: impl Fn() -> Fut + 'static,
    options: QueryOptions,
) -> QueryResult<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let client = use_query_client();
    let (data, set_data) = signal(None::<T>);
    let (error, set_error) = signal(None::<ApiError>);
    let (is_loading, set_is_loading) = signal(false);

    let fetcher = Rc::new(fetcher);

    Effect::new(move |_| {
        client.track();

        if let Some(enabled) = options.enabled {
            if !enabled.get() {
                set_is_loading.set(false);
                return;
            }
        }

        let key = key();

        let spawn_fetch = {
            let fetcher = fetcher.clone();
            let key = key.clone();
            move || {
                if !client.begin_fetch(&key) {
                    return;
                }
                let fut = fetcher();
                spawn_local(async move {
                    match fut.await {
                        Ok(value) => match serde_json::to_value(&value) {
                            Ok(json) => client.complete_ok(&key, json),
                            Err(e) => {
                                client.complete_err(&key, ApiError::serialization(e.to_string()))
                            }
                        },
                        Err(err) => client.complete_err(&key, err),
                    }
                });
            }
        };

        let apply_value = |value: Value| match serde_json::from_value::<T>(value) {
            Ok(decoded) => {
                set_error.set(None);
                set_data.set(Some(decoded));
            }
            Err(e) => set_error.set(Some(ApiError::serialization(e.to_string()))),
        };

        match client.read(&key, options.stale_time_ms) {
            ReadState::Fresh(value) => {
                set_is_loading.set(false);
                apply_value(value);
            }
            ReadState::Stale(value) => {
                set_is_loading.set(false);
                apply_value(value);
                spawn_fetch();
            }
            ReadState::Miss => {
                set_is_loading.set(true);
                spawn_fetch();
            }
            ReadState::InFlight => {
                set_is_loading.set(true);
            }
            ReadState::Failed(err) => {
                set_is_loading.set(false);
                set_error.set(Some(err));
            }
        }
    });

    QueryResult {
        data: data.into(),
        error: error.into(),
        is_loading: is_loading.into(),
    }
}

// =========================================================
// 写入
// =========================================================

/// 变更生命周期回调
pub struct MutationHandlers<T> {
    on_success: Option<Rc<dyn Fn(&T)>>,
    on_error: Option<Rc<dyn Fn(&ApiError)>>,
    /// 成功与否都会执行（登出等场景）
    on_settled: Option<Rc<dyn Fn()>>,
}

impl<T> MutationHandlers<T> {
    pub fn new() -> Self {
        Self {
            on_success: None,
            on_error: None,
            on_settled: None,
        }
    }

    pub fn on_success(mut self, f: impl Fn(&T) + 'static) -> Self {
        self.on_success = Some(Rc::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&ApiError) + 'static) -> Self {
        self.on_error = Some(Rc::new(f));
        self
    }

    pub fn on_settled(mut self, f: impl Fn() + 'static) -> Self {
        self.on_settled = Some(Rc::new(f));
        self
    }
}

impl<T> Default for MutationHandlers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MutationHandlers<T> {
    fn clone(&self) -> Self {
        Self {
            on_success: self.on_success.clone(),
            on_error: self.on_error.clone(),
            on_settled: self.on_settled.clone(),
        }
    }
}

/// 写入钩子暴露给视图的状态与触发器
///
/// 触发闭包放在局部 StoredValue 里，整个结构可 Copy，
/// 视图闭包随处捕获都不会撞上 Send 约束。
pub struct Mutation<I: 'static, T: Send + Sync + 'static> {
    pub is_pending: ReadSignal<bool>,
    pub error: ReadSignal<Option<ApiError>>,
    pub data: ReadSignal<Option<T>>,
    action: StoredValue<Rc<dyn Fn(I)>, LocalStorage>,
}

impl<I, T: Send + Sync> Mutation<I, T> {
    pub fn run(&self, input: I) {
        let action = self.action.get_value();
        action(input)
    }
}

impl<I, T: Send + Sync> Clone for Mutation<I, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, T: Send + Sync> Copy for Mutation<I, T> {}

pub fn use_mutation<I, T, Fut>(
    mutation_fn: impl Fn(I) -> Fut + 'static,
    handlers: MutationHandlers<T>,
) -> Mutation<I, T>
where
    I: 'static,
    T: Clone + Send + Sync + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let (is_pending, set_is_pending) = signal(false);
    let (error, set_error) = signal(None::<ApiError>);
    let (data, set_data) = signal(None::<T>);

    let action: Rc<dyn Fn(I)> = Rc::new(move |input: I| {
        set_is_pending.set(true);
        set_error.set(None);

        let handlers = handlers.clone();
        let fut = mutation_fn(input);
        spawn_local(async move {
            match fut.await {
                Ok(value) => {
                    set_data.set(Some(value.clone()));
                    if let Some(on_success) = &handlers.on_success {
                        on_success(&value);
                    }
                }
                Err(err) => {
                    set_error.set(Some(err.clone()));
                    if let Some(on_error) = &handlers.on_error {
                        on_error(&err);
                    }
                }
            }
            if let Some(on_settled) = &handlers.on_settled {
                on_settled();
            }
            set_is_pending.set(false);
        });
    });

    Mutation {
        is_pending,
        error,
        data,
        action: StoredValue::new_local(action),
    }
}
