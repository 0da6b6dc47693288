//! 新建账单页

use billdash_shared::{BillStatus, CreateBillInput, RecurringFrequency};
use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::components::toast::use_toasts;
use crate::hooks::bills::use_create_bill;
use crate::hooks::categories::use_categories;
use crate::hooks::vendors::use_vendors;
use crate::web::router::use_router;

#[component]
pub fn AddBillPage() -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();

    let vendors = use_vendors();
    let categories = use_categories();
    let create = use_create_bill();

    let is_submitting = create.is_pending;
    let created = create.data;
    let create_error = create.error;

    let (title, set_title) = signal(String::new());
    let (invoice_number, set_invoice_number) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (currency, set_currency) = signal("USD".to_string());
    let (due_date, set_due_date) = signal(String::new());
    let (vendor_id, set_vendor_id) = signal(Option::<String>::None);
    let (category_id, set_category_id) = signal(Option::<String>::None);
    let (payment_method, set_payment_method) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (save_as_draft, set_save_as_draft) = signal(false);
    let (is_recurring, set_is_recurring) = signal(false);
    let (frequency, set_frequency) = signal(RecurringFrequency::Monthly);
    let (recurring_day, set_recurring_day) = signal(1u32);

    Effect::new(move |_| {
        if created.get().is_some() {
            toasts.success("账单已创建");
            router.navigate("/bills");
        }
    });
    Effect::new(move |_| {
        if let Some(err) = create_error.get() {
            toasts.error(err.message);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if title.get().is_empty() {
            toasts.error("请填写账单标题");
            return;
        }
        // 金额以十进制字符串提交，这里只做数值性校验
        if !amount.get().parse::<f64>().is_ok_and(|v| v > 0.0) {
            toasts.error("请填写有效的金额");
            return;
        }
        let due = match DateTime::parse_from_rfc3339(&format!("{}T00:00:00Z", due_date.get())) {
            Ok(d) => d.with_timezone(&Utc),
            Err(_) => {
                toasts.error("请选择到期日");
                return;
            }
        };

        create.run(CreateBillInput {
            title: title.get(),
            vendor_id: vendor_id.get(),
            category_id: category_id.get(),
            invoice_number: Some(invoice_number.get()).filter(|s| !s.is_empty()),
            amount: amount.get(),
            currency: Some(currency.get()).filter(|s| !s.is_empty()),
            due_date: due,
            is_recurring: is_recurring.get(),
            recurring_frequency: is_recurring.get().then(|| frequency.get()),
            recurring_day: is_recurring.get().then(|| recurring_day.get()),
            payment_method: Some(payment_method.get()).filter(|s| !s.is_empty()),
            notes: Some(notes.get()).filter(|s| !s.is_empty()),
            status: save_as_draft.get().then_some(BillStatus::Draft),
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"添加账单"</h1>
                <p class="text-base-content/70 text-sm">"录入一张新账单"</p>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <div class="form-control">
                        <label for="title" class="label">
                            <span class="label-text">"标题"</span>
                        </label>
                        <input id="title" required
                            type="text"
                            placeholder="云服务器月费"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=title
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="amount" class="label">
                                <span class="label-text">"金额"</span>
                            </label>
                            <input id="amount" required
                                type="text"
                                placeholder="42.50"
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                                prop:value=amount
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="currency" class="label">
                                <span class="label-text">"币种"</span>
                            </label>
                            <input id="currency"
                                type="text"
                                on:input=move |ev| set_currency.set(event_target_value(&ev))
                                prop:value=currency
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="due_date" class="label">
                                <span class="label-text">"到期日"</span>
                            </label>
                            <input id="due_date" required
                                type="date"
                                on:input=move |ev| set_due_date.set(event_target_value(&ev))
                                prop:value=due_date
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="invoice_number" class="label">
                                <span class="label-text">"发票号 (可选)"</span>
                            </label>
                            <input id="invoice_number"
                                type="text"
                                placeholder="INV-2025-001"
                                on:input=move |ev| set_invoice_number.set(event_target_value(&ev))
                                prop:value=invoice_number
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"供应商"</span>
                            </label>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    set_vendor_id.set(Some(event_target_value(&ev)).filter(|v| !v.is_empty()))
                                }
                            >
                                <option value="">"无"</option>
                                <For
                                    each=move || vendors.data.get().unwrap_or_default()
                                    key=|v| v.id.clone()
                                    children=|v| view! { <option value=v.id.clone()>{v.name.clone()}</option> }
                                />
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"分类"</span>
                            </label>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    set_category_id.set(Some(event_target_value(&ev)).filter(|v| !v.is_empty()))
                                }
                            >
                                <option value="">"无"</option>
                                <For
                                    each=move || categories.data.get().unwrap_or_default()
                                    key=|c| c.id.clone()
                                    children=|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                                />
                            </select>
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="payment_method" class="label">
                            <span class="label-text">"支付方式 (可选)"</span>
                        </label>
                        <input id="payment_method"
                            type="text"
                            placeholder="银行转账"
                            on:input=move |ev| set_payment_method.set(event_target_value(&ev))
                            prop:value=payment_method
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="notes" class="label">
                            <span class="label-text">"备注 (可选)"</span>
                        </label>
                        <textarea id="notes"
                            class="textarea textarea-bordered w-full"
                            on:input=move |ev| set_notes.set(event_target_value(&ev))
                            prop:value=notes
                        ></textarea>
                    </div>

                    <div class="form-control">
                        <label class="label cursor-pointer">
                            <span class="label-text font-bold">"周期账单"</span>
                            <input type="checkbox" class="toggle toggle-primary"
                                prop:checked=is_recurring
                                on:change=move |ev| set_is_recurring.set(event_target_checked(&ev))
                            />
                        </label>
                    </div>

                    {move || if is_recurring.get() {
                        view! {
                            <div class="grid grid-cols-2 gap-4 bg-base-200 p-4 rounded-lg">
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"频率"</span>
                                    </label>
                                    <select class="select select-bordered w-full"
                                        on:change=move |ev| {
                                            set_frequency.set(match event_target_value(&ev).as_str() {
                                                "weekly" => RecurringFrequency::Weekly,
                                                "yearly" => RecurringFrequency::Yearly,
                                                _ => RecurringFrequency::Monthly,
                                            })
                                        }
                                    >
                                        <option value="weekly" selected=move || frequency.get() == RecurringFrequency::Weekly>"每周"</option>
                                        <option value="monthly" selected=move || frequency.get() == RecurringFrequency::Monthly>"每月"</option>
                                        <option value="yearly" selected=move || frequency.get() == RecurringFrequency::Yearly>"每年"</option>
                                    </select>
                                </div>
                                <div class="form-control">
                                    <label class="label">
                                        <span class="label-text">"扣款日"</span>
                                    </label>
                                    <input type="number" min="1" max="31"
                                        class="input input-bordered w-full"
                                        prop:value=recurring_day
                                        on:input=move |ev| {
                                            if let Ok(val) = event_target_value(&ev).parse::<u32>() {
                                                set_recurring_day.set(val);
                                            }
                                        }
                                    />
                                </div>
                            </div>
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }}

                    <div class="form-control">
                        <label class="label cursor-pointer">
                            <span class="label-text">"保存为草稿"</span>
                            <input type="checkbox" class="checkbox"
                                prop:checked=save_as_draft
                                on:change=move |ev| set_save_as_draft.set(event_target_checked(&ev))
                            />
                        </label>
                    </div>

                    <div class="flex justify-end gap-2">
                        <button type="button" class="btn btn-ghost"
                            on:click=move |_| router.navigate("/bills")>
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
