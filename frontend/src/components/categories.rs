//! 分类列表页

use leptos::prelude::*;

use crate::components::icons::{Plus, Trash2};
use crate::components::toast::use_toasts;
use crate::hooks::categories::{use_categories, use_delete_category};
use crate::web::router::use_router;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();

    let categories = use_categories();
    let delete = use_delete_category();

    let is_loading = categories.is_loading;
    let categories_error = categories.error;
    let deleted = delete.data;
    let delete_error = delete.error;

    Effect::new(move |_| {
        if deleted.get().is_some() {
            toasts.success("分类已删除");
        }
    });
    Effect::new(move |_| {
        if let Some(err) = delete_error.get() {
            toasts.error(err.message);
        }
    });

    let count = move || categories.data.get().map(|c| c.len()).unwrap_or(0);

    view! {
        <div class="max-w-7xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"分类"</h1>
                    <p class="text-base-content/70 text-sm">"给账单打标签以便归集统计"</p>
                </div>
                <button class="btn btn-primary gap-2" on:click=move |_| router.navigate("/categories/add")>
                    <Plus attr:class="h-4 w-4" /> "添加分类"
                </button>
            </div>

            <Show when=move || categories_error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || categories_error.get().map(|e| e.message).unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"名称"</th>
                                    <th class="hidden md:table-cell">"描述"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || count() == 0 && !is_loading.get()>
                                    <tr>
                                        <td colspan="3" class="text-center py-8 text-base-content/50">
                                            "还没有分类。添加一个以开始。"
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || is_loading.get() && count() == 0>
                                    <tr>
                                        <td colspan="3" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " 加载中..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || categories.data.get().unwrap_or_default()
                                    key=|c| c.id.clone()
                                    children=move |category| {
                                        let id = category.id.clone();
                                        let color = category
                                            .color
                                            .clone()
                                            .unwrap_or_else(|| "#9ca3af".to_string());
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="flex items-center gap-2 font-medium">
                                                        <span
                                                            class="w-3 h-3 rounded-full inline-block"
                                                            style=format!("background-color: {}", color)
                                                        ></span>
                                                        {category.name.clone()}
                                                    </div>
                                                </td>
                                                <td class="hidden md:table-cell text-sm opacity-70">
                                                    {category.description.clone().unwrap_or_else(|| "—".into())}
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
