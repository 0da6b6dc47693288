//! 用户资料数据访问钩子

use billdash_shared::{ChangePasswordInput, UpdateProfileInput, User};

use crate::api::use_api;
use crate::cache::{use_query_client, QueryKey};
use crate::hooks::{use_mutation, use_query, Mutation, MutationHandlers, QueryOptions, QueryResult};
use crate::services::users::UserService;

pub fn use_user_profile() -> QueryResult<User> {
    let service = UserService::new(use_api());
    use_query(
        || QueryKey::new(["users", "profile"]),
        move || {
            let service = service.clone();
            async move { service.profile().await }
        },
        QueryOptions::default(),
    )
}

/// 资料更新成功后直接回填缓存，profile 与 me 都换成响应里的新用户
pub fn use_update_profile() -> Mutation<UpdateProfileInput, User> {
    let service = UserService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |input: UpdateProfileInput| {
            let service = service.clone();
            async move { service.update_profile(&input).await }
        },
        MutationHandlers::new().on_success(move |user: &User| {
            client.set_query_data(&QueryKey::new(["users", "profile"]), user);
            client.set_query_data(&QueryKey::new(["auth", "me"]), user);
        }),
    )
}

pub fn use_change_password() -> Mutation<ChangePasswordInput, ()> {
    let service = UserService::new(use_api());
    use_mutation(
        move |input: ChangePasswordInput| {
            let service = service.clone();
            async move { service.change_password(&input).await }
        },
        MutationHandlers::new(),
    )
}
