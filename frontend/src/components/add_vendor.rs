//! 新建供应商页

use billdash_shared::CreateVendorInput;
use leptos::prelude::*;

use crate::components::toast::use_toasts;
use crate::hooks::vendors::use_create_vendor;
use crate::web::router::use_router;

#[component]
pub fn AddVendorPage() -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();

    let create = use_create_vendor();
    let is_submitting = create.is_pending;
    let created = create.data;
    let create_error = create.error;

    let (name, set_name) = signal(String::new());
    let (contact_email, set_contact_email) = signal(String::new());
    let (website, set_website) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (location, set_location) = signal(String::new());

    Effect::new(move |_| {
        if created.get().is_some() {
            toasts.success("供应商已创建");
            router.navigate("/vendors");
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
            toasts.error("请填写供应商名称");
            return;
        }
        create.run(CreateVendorInput {
            name: name.get(),
            contact_email: Some(contact_email.get()).filter(|s| !s.is_empty()),
            website: Some(website.get()).filter(|s| !s.is_empty()),
            address: Some(address.get()).filter(|s| !s.is_empty()),
            location: Some(location.get()).filter(|s| !s.is_empty()),
            ..Default::default()
        });
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"添加供应商"</h1>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <div class="form-control">
                        <label for="name" class="label">
                            <span class="label-text">"名称"</span>
                        </label>
                        <input id="name" required
                            type="text"
                            placeholder="Cloudflare"
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=name
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="contact_email" class="label">
                                <span class="label-text">"联系邮箱 (可选)"</span>
                            </label>
                            <input id="contact_email"
                                type="email"
                                placeholder="billing@example.com"
                                on:input=move |ev| set_contact_email.set(event_target_value(&ev))
                                prop:value=contact_email
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="website" class="label">
                                <span class="label-text">"网站 (可选)"</span>
                            </label>
                            <input id="website"
                                type="text"
                                placeholder="https://example.com"
                                on:input=move |ev| set_website.set(event_target_value(&ev))
                                prop:value=website
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="address" class="label">
                            <span class="label-text">"地址 (可选)"</span>
                        </label>
                        <input id="address"
                            type="text"
                            on:input=move |ev| set_address.set(event_target_value(&ev))
                            prop:value=address
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="location" class="label">
                            <span class="label-text">"地区 (可选)"</span>
                        </label>
                        <input id="location"
                            type="text"
                            placeholder="Shanghai"
                            on:input=move |ev| set_location.set(event_target_value(&ev))
                            prop:value=location
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="flex justify-end gap-2">
                        <button type="button" class="btn btn-ghost"
                            on:click=move |_| router.navigate("/vendors")>
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
