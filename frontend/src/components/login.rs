//! 登录页

use billdash_shared::LoginInput;
use leptos::prelude::*;

use crate::components::icons::Wallet;
use crate::hooks::auth::use_auth;
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let login = auth.login;
    let is_submitting = login.is_pending;
    let login_error = login.error;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_form_error.set(Some("请填写邮箱和密码".to_string()));
            return;
        }
        set_form_error.set(None);
        // 成功后的令牌持久化与跳转在钩子的成功回调里
        login.run(LoginInput {
            email: email.get(),
            password: password.get(),
        });
    };

    // 本地校验错误优先，其次是接口错误
    let error_msg = move || {
        form_error
            .get()
            .or_else(|| login_error.get().map(|e| e.message))
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Wallet attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"BillDash"</h1>
                        <p class="text-base-content/70">"登录以管理您的账单"</p>
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
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登录".into_any()
                                }}
                            </button>
                        </div>
                        <div class="text-center mt-2 text-sm">
                            "还没有账号？"
                            <a class="link link-primary" on:click=move |_| router.navigate("/register")>
                                "注册"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
