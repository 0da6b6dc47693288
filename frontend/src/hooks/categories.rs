//! 分类数据访问钩子

use billdash_shared::{Category, CreateCategoryInput, UpdateCategoryInput};
use leptos::prelude::*;

use crate::api::use_api;
use crate::cache::{use_query_client, QueryKey};
use crate::hooks::{use_mutation, use_query, Mutation, MutationHandlers, QueryOptions, QueryResult};
use crate::services::categories::CategoryService;

pub fn use_categories() -> QueryResult<Vec<Category>> {
    let service = CategoryService::new(use_api());
    use_query(
        || QueryKey::new(["categories"]),
        move || {
            let service = service.clone();
            async move { service.list().await }
        },
        QueryOptions::default(),
    )
}

pub fn use_category(id: Signal<Option<String>>) -> QueryResult<Category> {
    let service = CategoryService::new(use_api());
    use_query(
        move || QueryKey::new(["categories"]).with(id.get().unwrap_or_default()),
        move || {
            let service = service.clone();
            let id = id.get_untracked().unwrap_or_default();
            async move { service.get(&id).await }
        },
        QueryOptions::default().enabled(Signal::derive(move || id.get().is_some())),
    )
}

pub fn use_create_category() -> Mutation<CreateCategoryInput, Category> {
    let service = CategoryService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |input: CreateCategoryInput| {
            let service = service.clone();
            async move { service.create(&input).await }
        },
        MutationHandlers::new().on_success(move |_: &Category| {
            client.invalidate(&QueryKey::new(["categories"]));
        }),
    )
}

pub fn use_update_category() -> Mutation<(String, UpdateCategoryInput), Category> {
    let service = CategoryService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |(id, input): (String, UpdateCategoryInput)| {
            let service = service.clone();
            async move { service.update(&id, &input).await }
        },
        MutationHandlers::new().on_success(move |_: &Category| {
            client.invalidate(&QueryKey::new(["categories"]));
        }),
    )
}

pub fn use_delete_category() -> Mutation<String, ()> {
    let service = CategoryService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |id: String| {
            let service = service.clone();
            async move { service.delete(&id).await }
        },
        MutationHandlers::new().on_success(move |_: &()| {
            client.invalidate(&QueryKey::new(["categories"]));
        }),
    )
}
