//! 设置页
//!
//! 个人资料与修改密码两块。资料表单首次拿到数据时回填一次，
//! 之后以用户输入为准，不再被后台重验覆盖。

use billdash_shared::{ChangePasswordInput, UpdateProfileInput};
use leptos::prelude::*;

use crate::components::toast::use_toasts;
use crate::hooks::users::{use_change_password, use_update_profile, use_user_profile};

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"设置"</h1>
                <p class="text-base-content/70 text-sm">"个人资料与账号安全"</p>
            </div>

            <ProfileCard />
            <PasswordCard />
        </div>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let toasts = use_toasts();
    let profile = use_user_profile();
    let update = use_update_profile();

    let is_submitting = update.is_pending;
    let updated = update.data;
    let update_error = update.error;

    let (name, set_name) = signal(String::new());
    let (avatar_url, set_avatar_url) = signal(String::new());
    let seeded = StoredValue::new(false);

    // 查询结果首次到达时回填表单
    Effect::new(move |_| {
        if let Some(user) = profile.data.get() {
            if !seeded.get_value() {
                set_name.set(user.name.clone());
                set_avatar_url.set(user.avatar_url.clone().unwrap_or_default());
                seeded.set_value(true);
            }
        }
    });

    Effect::new(move |_| {
        if updated.get().is_some() {
            toasts.success("资料已更新");
        }
    });
    Effect::new(move |_| {
        if let Some(err) = update_error.get() {
            toasts.error(err.message);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get().is_empty() {
            toasts.error("姓名不能为空");
            return;
        }
        update.run(UpdateProfileInput {
            name: Some(name.get()),
            avatar_url: Some(avatar_url.get()).filter(|s| !s.is_empty()),
        });
    };

    let email = move || {
        profile
            .data
            .get()
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body space-y-4" on:submit=on_submit>
                <h3 class="card-title text-base">"个人资料"</h3>

                <div class="form-control">
                    <label class="label">
                        <span class="label-text">"邮箱"</span>
                    </label>
                    <input type="email" class="input input-bordered w-full" prop:value=email disabled />
                </div>

                <div class="form-control">
                    <label for="profile_name" class="label">
                        <span class="label-text">"姓名"</span>
                    </label>
                    <input id="profile_name" required
                        type="text"
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        prop:value=name
                        class="input input-bordered w-full"
                    />
                </div>

                <div class="form-control">
                    <label for="avatar_url" class="label">
                        <span class="label-text">"头像 URL (可选)"</span>
                    </label>
                    <input id="avatar_url"
                        type="text"
                        placeholder="https://..."
                        on:input=move |ev| set_avatar_url.set(event_target_value(&ev))
                        prop:value=avatar_url
                        class="input input-bordered w-full"
                    />
                </div>

                <div class="flex justify-end">
                    <button type="submit" disabled=move || is_submitting.get() class="btn btn-primary">
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "保存中..." }.into_any()
                        } else {
                            "保存资料".into_any()
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn PasswordCard() -> impl IntoView {
    let toasts = use_toasts();
    let change = use_change_password();

    let is_submitting = change.is_pending;
    let changed = change.data;
    let change_error = change.error;

    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    Effect::new(move |_| {
        if changed.get().is_some() {
            toasts.success("密码已修改");
            set_current_password.set(String::new());
            set_new_password.set(String::new());
            set_confirm_password.set(String::new());
        }
    });
    Effect::new(move |_| {
        if let Some(err) = change_error.get() {
            toasts.error(err.message);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if current_password.get().is_empty() || new_password.get().is_empty() {
            toasts.error("请填写当前密码与新密码");
            return;
        }
        if new_password.get() != confirm_password.get() {
            toasts.error("两次输入的新密码不一致");
            return;
        }
        change.run(ChangePasswordInput {
            current_password: current_password.get(),
            new_password: new_password.get(),
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body space-y-4" on:submit=on_submit>
                <h3 class="card-title text-base">"修改密码"</h3>

                <div class="form-control">
                    <label for="current_password" class="label">
                        <span class="label-text">"当前密码"</span>
                    </label>
                    <input id="current_password" required
                        type="password"
                        on:input=move |ev| set_current_password.set(event_target_value(&ev))
                        prop:value=current_password
                        class="input input-bordered w-full"
                    />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label for="new_password" class="label">
                            <span class="label-text">"新密码"</span>
                        </label>
                        <input id="new_password" required
                            type="password"
                            on:input=move |ev| set_new_password.set(event_target_value(&ev))
                            prop:value=new_password
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="confirm_password" class="label">
                            <span class="label-text">"确认新密码"</span>
                        </label>
                        <input id="confirm_password" required
                            type="password"
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                            prop:value=confirm_password
                            class="input input-bordered w-full"
                        />
                    </div>
                </div>

                <div class="flex justify-end">
                    <button type="submit" disabled=move || is_submitting.get() class="btn btn-primary">
                        {move || if is_submitting.get() {
                            view! { <span class="loading loading-spinner"></span> "提交中..." }.into_any()
                        } else {
                            "修改密码".into_any()
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
