//! 账单详情页
//!
//! 支付 / 删除操作 + 活动审计流。支付不传日期，
//! 服务层会取调用时刻填入。

use billdash_shared::{ActivityAction, BillStatus};
use leptos::prelude::*;

use crate::components::bills::{status_badge, status_label};
use crate::components::icons::{CreditCard, History, Trash2};
use crate::components::toast::use_toasts;
use crate::hooks::bills::{use_bill, use_bill_activities, use_delete_bill, use_pay_bill};
use crate::web::router::use_router;

fn activity_label(action: ActivityAction) -> &'static str {
    match action {
        ActivityAction::Created => "创建",
        ActivityAction::Updated => "更新",
        ActivityAction::StatusChanged => "状态变更",
        ActivityAction::PaymentReminderSent => "发送付款提醒",
        ActivityAction::AttachmentAdded => "添加附件",
        ActivityAction::AttachmentRemoved => "移除附件",
        ActivityAction::Deleted => "删除",
    }
}

#[component]
pub fn BillDetailPage(id: String) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();

    let id_sig = Signal::derive({
        let id = id.clone();
        move || Some(id.clone())
    });
    let bill = use_bill(id_sig);
    let activities = use_bill_activities(id_sig);
    let pay = use_pay_bill();
    let delete = use_delete_bill();

    let is_loading = bill.is_loading;
    let bill_error = bill.error;
    let pay_pending = pay.is_pending;
    let delete_pending = delete.is_pending;
    let paid = pay.data;
    let deleted = delete.data;
    let pay_error = pay.error;
    let delete_error = delete.error;

    Effect::new(move |_| {
        if paid.get().is_some() {
            toasts.success("账单已标记为已支付");
        }
    });
    Effect::new(move |_| {
        if deleted.get().is_some() {
            toasts.success("账单已删除");
            router.navigate("/bills");
        }
    });
    // 写入失败走全局提示
    Effect::new(move |_| {
        if let Some(err) = pay_error.get().or_else(|| delete_error.get()) {
            toasts.error(err.message);
        }
    });

    let on_pay = {
        let id = id.clone();
        move |_| pay.run((id.clone(), None))
    };
    let on_delete = {
        let id = id.clone();
        move |_| delete.run(id.clone())
    };

    // 详情字段行
    let field = |label: &'static str, value: String| {
        view! {
            <div class="flex justify-between py-2 border-b border-base-200 last:border-none">
                <span class="text-base-content/70 text-sm">{label}</span>
                <span class="text-sm font-medium">{value}</span>
            </div>
        }
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <Show when=move || bill_error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || bill_error.get().map(|e| e.message).unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || is_loading.get() && bill.data.get().is_none()>
                <div class="flex justify-center py-16">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            {move || bill.data.get().map(|b| {
                // Clone the handlers into owned locals so the `<Show>` child
                // closure (which must be `'static`) moves the clone, leaving the
                // outer reactive closure's copies intact (keeps it `FnMut`).
                let on_pay = on_pay.clone();
                let on_delete = on_delete.clone();
                let recurring = if b.is_recurring {
                    let freq = b
                        .recurring_frequency
                        .map(|f| match f {
                            billdash_shared::RecurringFrequency::Weekly => "每周",
                            billdash_shared::RecurringFrequency::Monthly => "每月",
                            billdash_shared::RecurringFrequency::Yearly => "每年",
                        })
                        .unwrap_or("周期");
                    match b.recurring_day {
                        Some(day) => format!("{} (第 {} 天)", freq, day),
                        None => freq.to_string(),
                    }
                } else {
                    "一次性".to_string()
                };

                view! {
                    <div class="space-y-6">
                        <div class="flex items-center justify-between">
                            <div>
                                <h1 class="text-2xl font-bold">{b.title.clone()}</h1>
                                <span class=status_badge(b.status)>{status_label(b.status)}</span>
                            </div>
                            <div class="flex gap-2">
                                <Show when={
                                    let status = b.status;
                                    move || status != BillStatus::Paid
                                }>
                                    <button
                                        class="btn btn-success gap-2"
                                        disabled=move || pay_pending.get()
                                        on:click=on_pay.clone()
                                    >
                                        <CreditCard attr:class="h-4 w-4" /> "标记已付"
                                    </button>
                                </Show>
                                <button
                                    class="btn btn-outline btn-error gap-2"
                                    disabled=move || delete_pending.get()
                                    on:click=on_delete.clone()
                                >
                                    <Trash2 attr:class="h-4 w-4" /> "删除"
                                </button>
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                {field("金额", format!("{} {}", b.amount, b.currency))}
                                {field("到期日", b.due_date.format("%Y-%m-%d").to_string())}
                                {field("已付日期", b.paid_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "—".into()))}
                                {field("供应商", b.vendor.as_ref().map(|v| v.name.clone()).unwrap_or_else(|| "—".into()))}
                                {field("分类", b.category.as_ref().map(|c| c.name.clone()).unwrap_or_else(|| "—".into()))}
                                {field("发票号", b.invoice_number.clone().unwrap_or_else(|| "—".into()))}
                                {field("支付方式", b.payment_method.clone().unwrap_or_else(|| "—".into()))}
                                {field("周期", recurring)}
                                {field("备注", b.notes.clone().unwrap_or_else(|| "—".into()))}
                            </div>
                        </div>

                        {b.attachments.as_ref().filter(|a| !a.is_empty()).map(|attachments| {
                            let attachments = attachments.clone();
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body">
                                        <h3 class="card-title text-base">"附件"</h3>
                                        <ul class="space-y-1">
                                            {attachments.into_iter().map(|a| view! {
                                                <li>
                                                    <a class="link link-primary text-sm" href=a.file_url target="_blank">
                                                        {a.file_name}
                                                    </a>
                                                </li>
                                            }).collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                </div>
                            }
                        })}
                    </div>
                }
            })}

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title text-base gap-2">
                        <History attr:class="h-4 w-4" /> "活动记录"
                    </h3>
                    <Show
                        when=move || activities.data.get().is_some_and(|a| !a.is_empty())
                        fallback=|| view! { <p class="text-base-content/50 text-sm py-2">"暂无活动"</p> }
                    >
                        <ul class="space-y-3">
                            <For
                                each=move || activities.data.get().unwrap_or_default()
                                key=|a| a.id.clone()
                                children=|a| {
                                    let who = a
                                        .user
                                        .as_ref()
                                        .map(|u| u.name.clone())
                                        .unwrap_or_else(|| "系统".to_string());
                                    view! {
                                        <li class="flex items-start gap-3">
                                            <span class="badge badge-outline badge-sm mt-1">
                                                {activity_label(a.action)}
                                            </span>
                                            <div class="flex-1">
                                                <p class="text-sm">{a.details.clone().unwrap_or_default()}</p>
                                                <p class="text-xs opacity-50">
                                                    {who} " · " {a.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                                </p>
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </div>
        </div>
    }
}
