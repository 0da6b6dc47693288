//! 新建分类页

use billdash_shared::CreateCategoryInput;
use leptos::prelude::*;

use crate::components::toast::use_toasts;
use crate::hooks::categories::use_create_category;
use crate::web::router::use_router;

#[component]
pub fn AddCategoryPage() -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();

    let create = use_create_category();
    let is_submitting = create.is_pending;
    let created = create.data;
    let create_error = create.error;

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (color, set_color) = signal("#3b82f6".to_string());

    Effect::new(move |_| {
        if created.get().is_some() {
            toasts.success("分类已创建");
            router.navigate("/categories");
        }
    });
    Effect::new(move |_| {
        if let Some(err) = create_error.get() {
            toasts.error(err.message);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() {
            toasts.error("请填写分类名称");
            return;
        }
        create.run(CreateCategoryInput {
            name: name.get(),
            description: Some(description.get()).filter(|s| !s.is_empty()),
            color: Some(color.get()).filter(|s| !s.is_empty()),
            ..Default::default()
        });
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"添加分类"</h1>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <div class="form-control">
                        <label for="name" class="label">
                            <span class="label-text">"名称"</span>
                        </label>
                        <input id="name" required
                            type="text"
                            placeholder="云服务"
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=name
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="description" class="label">
                            <span class="label-text">"描述 (可选)"</span>
                        </label>
                        <input id="description"
                            type="text"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=description
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="color" class="label">
                            <span class="label-text">"颜色"</span>
                        </label>
                        <input id="color"
                            type="color"
                            on:input=move |ev| set_color.set(event_target_value(&ev))
                            prop:value=color
                            class="input input-bordered w-24 h-12 p-1"
                        />
                    </div>

                    <div class="flex justify-end gap-2">
                        <button type="button" class="btn btn-ghost"
                            on:click=move |_| router.navigate("/categories")>
                            "取消"
                        </button>
                        <button type="submit" disabled=move || is_submitting.get() class="btn btn-primary">
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "保存中..." }.into_any()
                            } else {
                                "保存".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
