//! 会话状态
//!
//! 全应用唯一的进程级状态：当前令牌与当前用户。
//! 路由守卫通过注入的认证信号检查会话，与路由系统解耦。

use billdash_shared::User;
use leptos::prelude::*;

/// 会话上下文
///
/// 信号本身可 Copy，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
    current_user: RwSignal<Option<User>>,
}

impl SessionContext {
    /// 创建会话上下文，初始令牌来自持久化存储
    pub fn new(initial_token: Option<String>) -> Self {
        Self {
            token: RwSignal::new(initial_token),
            current_user: RwSignal::new(None),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn set_token(&self, token: Option<String>) {
        self.token.set(token);
    }

    pub fn current_user(&self) -> ReadSignal<Option<User>> {
        self.current_user.read_only()
    }

    pub fn set_current_user(&self, user: Option<User>) {
        self.current_user.set(user);
    }

    /// 认证状态信号（用于路由守卫注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let token = self.token;
        Signal::derive(move || token.get().is_some())
    }

    /// 登出 / 会话失效时的清理
    pub fn clear(&self) {
        self.token.set(None);
        self.current_user.set(None);
    }
}

pub fn provide_session(initial_token: Option<String>) -> SessionContext {
    let session = SessionContext::new(initial_token);
    provide_context(session);
    session
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
