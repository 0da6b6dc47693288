//! 供应商数据访问钩子

use billdash_shared::{CreateVendorInput, UpdateVendorInput, Vendor};
use leptos::prelude::*;

use crate::api::use_api;
use crate::cache::{use_query_client, QueryKey};
use crate::hooks::{use_mutation, use_query, Mutation, MutationHandlers, QueryOptions, QueryResult};
use crate::services::vendors::VendorService;

pub fn use_vendors() -> QueryResult<Vec<Vendor>> {
    let service = VendorService::new(use_api());
    use_query(
        || QueryKey::new(["vendors"]),
        move || {
            let service = service.clone();
            async move { service.list().await }
        },
        QueryOptions::default(),
    )
}

pub fn use_vendor(id: Signal<Option<String>>) -> QueryResult<Vendor> {
    let service = VendorService::new(use_api());
    use_query(
        move || QueryKey::new(["vendors"]).with(id.get().unwrap_or_default()),
        move || {
            let service = service.clone();
            let id = id.get_untracked().unwrap_or_default();
            async move { service.get(&id).await }
        },
        QueryOptions::default().enabled(Signal::derive(move || id.get().is_some())),
    )
}

pub fn use_create_vendor() -> Mutation<CreateVendorInput, Vendor> {
    let service = VendorService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |input: CreateVendorInput| {
            let service = service.clone();
            async move { service.create(&input).await }
        },
        MutationHandlers::new().on_success(move |_: &Vendor| {
            client.invalidate(&QueryKey::new(["vendors"]));
        }),
    )
}

pub fn use_update_vendor() -> Mutation<(String, UpdateVendorInput), Vendor> {
    let service = VendorService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |(id, input): (String, UpdateVendorInput)| {
            let service = service.clone();
            async move { service.update(&id, &input).await }
        },
        MutationHandlers::new().on_success(move |_: &Vendor| {
            client.invalidate(&QueryKey::new(["vendors"]));
        }),
    )
}

pub fn use_delete_vendor() -> Mutation<String, ()> {
    let service = VendorService::new(use_api());
    let client = use_query_client();
    use_mutation(
        move |id: String| {
            let service = service.clone();
            async move { service.delete(&id).await }
        },
        MutationHandlers::new().on_success(move |_: &()| {
            client.invalidate(&QueryKey::new(["vendors"]));
        }),
    )
}
