//! 全局提示
//!
//! 变更成功/失败的轻量通知，显示后定时自动消失。

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// 提示展示时长
const TOAST_DISMISS_MS: u32 = 3_000;

/// 提示上下文
///
/// 内容为 (消息, 是否出错)；同一时间只保留最新一条。
#[derive(Clone, Copy)]
pub struct ToastContext {
    message: RwSignal<Option<(String, bool)>>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.message.set(Some((msg.into(), false)));
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.message.set(Some((msg.into(), true)));
    }
}

pub fn provide_toasts() -> ToastContext {
    let toasts = ToastContext::new();
    provide_context(toasts);
    toasts
}

/// 从 Context 获取提示上下文
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 提示宿主组件，挂在应用根部
#[component]
pub fn ToastHost() -> impl IntoView {
    let message = use_toasts().message;

    // 显示后起一个一次性定时器清除
    Effect::new(move |_| {
        if message.get().is_some() {
            Timeout::new(TOAST_DISMISS_MS, move || message.set(None)).forget();
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = message.get().unwrap();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || message.get().unwrap().0}</span>
                </div>
            </div>
        </Show>
    }
}
