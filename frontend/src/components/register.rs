//! 注册页
//!
//! 注册即创建公司与首个用户，成功后与登录走相同的会话接线。

use billdash_shared::RegisterInput;
use leptos::prelude::*;

use crate::components::icons::Wallet;
use crate::hooks::auth::use_auth;
use crate::web::router::use_router;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let register = auth.register;
    let is_submitting = register.is_pending;
    let register_error = register.error;

    let (name, set_name) = signal(String::new());
    let (company_name, set_company_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty()
            || company_name.get().is_empty()
            || email.get().is_empty()
            || password.get().is_empty()
        {
            set_form_error.set(Some("请填写所有字段".to_string()));
            return;
        }
        set_form_error.set(None);
        register.run(RegisterInput {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            company_name: company_name.get(),
        });
    };

    let error_msg = move || {
        form_error
            .get()
            .or_else(|| register_error.get().map(|e| e.message))
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Wallet attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"创建账号"</h1>
                        <p class="text-base-content/70">"几步之内开始管理公司账单"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"姓名"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                placeholder="张三"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="company_name">
                                <span class="label-text">"公司名称"</span>
                            </label>
                            <input
                                id="company_name"
                                type="text"
                                placeholder="Acme Inc."
                                on:input=move |ev| set_company_name.set(event_target_value(&ev))
                                prop:value=company_name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"邮箱"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "注册中..." }.into_any()
                                } else {
                                    "注册".into_any()
                                }}
                            </button>
                        </div>
                        <div class="text-center mt-2 text-sm">
                            "已有账号？"
                            <a class="link link-primary" on:click=move |_| router.navigate("/login")>
                                "登录"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
