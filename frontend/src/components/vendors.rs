//! 供应商列表页

use leptos::prelude::*;

use crate::components::icons::{Plus, Trash2};
use crate::components::toast::use_toasts;
use crate::hooks::vendors::{use_delete_vendor, use_vendors};
use crate::web::router::use_router;

#[component]
pub fn VendorsPage() -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();

    let vendors = use_vendors();
    let delete = use_delete_vendor();

    let is_loading = vendors.is_loading;
    let vendors_error = vendors.error;
    let deleted = delete.data;
    let delete_error = delete.error;

    Effect::new(move |_| {
        if deleted.get().is_some() {
            toasts.success("供应商已删除");
        }
    });
    Effect::new(move |_| {
        if let Some(err) = delete_error.get() {
            toasts.error(err.message);
        }
    });

    let count = move || vendors.data.get().map(|v| v.len()).unwrap_or(0);

    view! {
        <div class="max-w-7xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"供应商"</h1>
                    <p class="text-base-content/70 text-sm">"管理公司的收款方"</p>
                </div>
                <button class="btn btn-primary gap-2" on:click=move |_| router.navigate("/vendors/add")>
                    <Plus attr:class="h-4 w-4" /> "添加供应商"
                </button>
            </div>

            <Show when=move || vendors_error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || vendors_error.get().map(|e| e.message).unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"名称"</th>
                                    <th class="hidden md:table-cell">"联系邮箱"</th>
                                    <th class="hidden md:table-cell">"网站"</th>
                                    <th class="hidden md:table-cell">"地区"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || count() == 0 && !is_loading.get()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            "还没有供应商。添加一个以开始。"
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || is_loading.get() && count() == 0>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " 加载中..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || vendors.data.get().unwrap_or_default()
                                    key=|v| v.id.clone()
                                    children=move |vendor| {
                                        let id = vendor.id.clone();
                                        view! {
                                            <tr>
                                                <td class="font-medium">{vendor.name.clone()}</td>
                                                <td class="hidden md:table-cell text-sm opacity-70">
                                                    {vendor.contact_email.clone().unwrap_or_else(|| "—".into())}
                                                </td>
                                                <td class="hidden md:table-cell text-sm opacity-70">
                                                    {vendor.website.clone().unwrap_or_else(|| "—".into())}
                                                </td>
                                                <td class="hidden md:table-cell text-sm opacity-70">
                                                    {vendor.location.clone().unwrap_or_else(|| "—".into())}
                                                </td>
                                                <td class="text-right">
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                        on:click=move |_| delete.run(id.clone())
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
