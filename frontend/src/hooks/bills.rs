//! 账单数据访问钩子
//!
//! 列表键携带全部过滤参数，过滤条件一变就换键重新拉取。
//! 任何账单写入都会波及仪表盘聚合，所以失效集合始终包含 dashboard。

use billdash_shared::protocol::PaginatedResponse;
use billdash_shared::{Bill, BillActivity, BillFilters, CreateBillInput, UpdateBillInput};
use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::api::use_api;
use crate::cache::{use_query_client, QueryKey};
use crate::hooks::{use_mutation, use_query, Mutation, MutationHandlers, QueryOptions, QueryResult};
use crate::services::bills::BillService;

fn list_key(filters: &BillFilters) -> QueryKey {
    let mut key = QueryKey::new(["bills", "list"])
        .with(filters.page)
        .with(filters.page_size);
    if let Some(status) = filters.status {
        key = key.with(status.as_str());
    }
    if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
        key = key.with(search);
    }
    key
}

pub fn use_bills(filters: Signal<BillFilters>) -> QueryResult<PaginatedResponse<Bill>> {
    let service = BillService::new(use_api());
    use_query(
        move || list_key(&filters.get()),
        move || {
            let service = service.clone();
            let filters = filters.get_untracked();
            async move { service.list(&filters).await }
        },
        QueryOptions::default(),
    )
}

pub fn use_bill(id: Signal<Option<String>>) -> QueryResult<Bill> {
    let service = BillService::new(use_api());
    use_query(
        move || QueryKey::new(["bills"]).with(id.get().unwrap_or_default()),
        move || {
            let service = service.clone();
            let id = id.get_untracked().unwrap_or_default();
            async move { service.get(&id).await }
        },
        QueryOptions::default().enabled(Signal::derive(move || id.get().is_some())),
    )
}

pub fn use_bill_activities(id: Signal<Option<String>>) -> QueryResult<Vec<BillActivity>> {
    let service = BillService::new(use_api());
    use_query(
        move || {
            QueryKey::new(["bills"])
                .with(id.get().unwrap_or_default())
                .with("activities")
        },
        move || {
            let service = service.clone();
            let id = id.get_untracked().unwrap_or_default();
            async move { service.activities(&id).await }
        },
        QueryOptions::default().enabled(Signal::derive(move || id.get().is_some())),
    )
}

pub fn use_create_bill() -> Mutation<CreateBillInput, Bill> {
    let service = BillService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |input: CreateBillInput| {
            let service = service.clone();
            async move { service.create(&input).await }
        },
        MutationHandlers::new().on_success(move |_: &Bill| {
            client.invalidate(&QueryKey::new(["bills"]));
            client.invalidate(&QueryKey::new(["dashboard"]));
        }),
    )
}

pub fn use_update_bill() -> Mutation<(String, UpdateBillInput), Bill> {
    let service = BillService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |(id, input): (String, UpdateBillInput)| {
            let service = service.clone();
            async move { service.update(&id, &input).await }
        },
        MutationHandlers::new().on_success(move |bill: &Bill| {
            client.invalidate(&QueryKey::new(["bills"]));
            client.invalidate(&QueryKey::new(["bills"]).with(&bill.id));
            client.invalidate(&QueryKey::new(["dashboard"]));
        }),
    )
}

pub fn use_delete_bill() -> Mutation<String, ()> {
    let service = BillService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |id: String| {
            let service = service.clone();
            async move { service.delete(&id).await }
        },
        MutationHandlers::new().on_success(move |_: &()| {
            client.invalidate(&QueryKey::new(["bills"]));
            client.invalidate(&QueryKey::new(["dashboard"]));
        }),
    )
}

pub fn use_pay_bill() -> Mutation<(String, Option<DateTime<Utc>>), Bill> {
    let service = BillService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |(id, date): (String, Option<DateTime<Utc>>)| {
            let service = service.clone();
            async move { service.pay(&id, date).await }
        },
        MutationHandlers::new().on_success(move |bill: &Bill| {
            client.invalidate(&QueryKey::new(["bills"]));
            client.invalidate(&QueryKey::new(["bills"]).with(&bill.id));
            client.invalidate(&QueryKey::new(["dashboard"]));
        }),
    )
}
