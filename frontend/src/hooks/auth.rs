//! 认证数据访问钩子
//!
//! 登录/注册成功后：持久化令牌、更新会话、回填 me 缓存、回到首页。
//! 登出无论网络结果如何都清空会话、凭据与整个缓存，再回登录页。

use billdash_shared::{AuthResponse, LoginInput, RegisterInput, User};
use leptos::prelude::*;

use crate::api::use_api;
use crate::cache::{use_query_client, QueryKey};
use crate::hooks::{use_mutation, use_query, Mutation, MutationHandlers, QueryOptions, QueryResult};
use crate::services::auth::AuthService;
use crate::session::use_session;
use crate::web::router::use_router;

/// me 查询时效 5 分钟
const ME_STALE_TIME_MS: i64 = 5 * 60 * 1000;

pub struct AuthHook {
    /// 当前用户（仅在持有令牌时拉取，失败不重试）
    pub user: QueryResult<User>,
    pub login: Mutation<LoginInput, AuthResponse>,
    pub register: Mutation<RegisterInput, AuthResponse>,
    pub logout: Mutation<(), ()>,
}

pub fn use_auth() -> AuthHook {
    let api = use_api();
    let client = use_query_client();
    let session = use_session();
    let router = use_router();

    let user = {
        let service = AuthService::new(api.clone());
        use_query(
            || QueryKey::new(["auth", "me"]),
            move || {
                let service = service.clone();
                async move { service.me().await }
            },
            QueryOptions::default()
                .stale_time(ME_STALE_TIME_MS)
                .enabled(session.is_authenticated_signal()),
        )
    };

    // 登录/注册共用的会话接线
    let establish_session = {
        let api = api.clone();
        move |auth: &AuthResponse| {
            api.credentials().store(&auth.token);
            session.set_token(Some(auth.token.clone()));
            session.set_current_user(Some(auth.user.clone()));
            client.set_query_data(&QueryKey::new(["auth", "me"]), &auth.user);
            router.navigate("/");
        }
    };

    let login = {
        let service = AuthService::new(api.clone());
        let establish_session = establish_session.clone();
        use_mutation(
            move |input: LoginInput| {
                let service = service.clone();
                async move { service.login(&input).await }
            },
            MutationHandlers::new().on_success(move |auth: &AuthResponse| establish_session(auth)),
        )
    };

    let register = {
        let service = AuthService::new(api.clone());
        use_mutation(
            move |input: RegisterInput| {
                let service = service.clone();
                async move { service.register(&input).await }
            },
            MutationHandlers::new().on_success(move |auth: &AuthResponse| establish_session(auth)),
        )
    };

    let logout = {
        let service = AuthService::new(api.clone());
        use_mutation(
            move |_: ()| {
                let service = service.clone();
                async move { service.logout().await }
            },
            MutationHandlers::new().on_settled(move || {
                api.credentials().clear();
                session.clear();
                client.clear();
                router.navigate("/login");
            }),
        )
    };

    AuthHook {
        user,
        login,
        register,
        logout,
    }
}
