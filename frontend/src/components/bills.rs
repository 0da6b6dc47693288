//! 账单列表页
//!
//! 分页、状态过滤、防抖搜索全部体现在列表缓存键上，
//! 条件一变自动换键拉取。行点击进入详情。

use billdash_shared::{BillFilters, BillStatus};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::icons::{ChevronLeft, ChevronRight, Plus, Search};
use crate::hooks::bills::use_bills;
use crate::web::router::use_router;

/// 搜索防抖窗口
const SEARCH_DEBOUNCE_MS: u32 = 300;
const PAGE_SIZE: u32 = 10;

pub(crate) fn status_badge(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Draft => "badge badge-ghost",
        BillStatus::Unpaid => "badge badge-warning",
        BillStatus::Paid => "badge badge-success",
        BillStatus::Overdue => "badge badge-error",
    }
}

pub(crate) fn status_label(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Draft => "草稿",
        BillStatus::Unpaid => "待付",
        BillStatus::Paid => "已付",
        BillStatus::Overdue => "逾期",
    }
}

#[component]
pub fn BillsPage() -> impl IntoView {
    let router = use_router();

    let (page, set_page) = signal(1u32);
    let (status, set_status) = signal(Option::<BillStatus>::None);
    // 输入框即时值与真正进入过滤条件的值分开，中间隔一个防抖定时器
    let (search_input, set_search_input) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let pending_debounce: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);

    let filters = Signal::derive(move || BillFilters {
        status: status.get(),
        search: Some(search.get()).filter(|s| !s.is_empty()),
        page: page.get(),
        page_size: PAGE_SIZE,
    });
    let bills = use_bills(filters);

    let is_loading = bills.is_loading;
    let bills_error = bills.error;

    let on_search_input = move |ev| {
        let value = event_target_value(&ev);
        set_search_input.set(value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            set_search.set(value);
            set_page.set(1);
        });
        // 换新定时器，旧的取消
        if let Some(prev) = pending_debounce
            .try_update_value(|slot| slot.replace(timeout))
            .flatten()
        {
            prev.cancel();
        }
    };

    let on_status_change = move |ev| {
        set_status.set(match event_target_value(&ev).as_str() {
            "draft" => Some(BillStatus::Draft),
            "unpaid" => Some(BillStatus::Unpaid),
            "paid" => Some(BillStatus::Paid),
            "overdue" => Some(BillStatus::Overdue),
            _ => None,
        });
        set_page.set(1);
    };

    let total_pages = move || {
        bills
            .data
            .get()
            .map(|p| p.meta.total_pages)
            .unwrap_or(0)
    };
    let total_items = move || bills.data.get().map(|p| p.meta.total_items).unwrap_or(0);
    let row_count = move || bills.data.get().map(|p| p.data.len()).unwrap_or(0);

    view! {
        <div class="max-w-7xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"账单"</h1>
                    <p class="text-base-content/70 text-sm">
                        {move || format!("共 {} 条", total_items())}
                    </p>
                </div>
                <button class="btn btn-primary gap-2" on:click=move |_| router.navigate("/bills/add")>
                    <Plus attr:class="h-4 w-4" /> "添加账单"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="flex flex-col md:flex-row gap-3 p-6 pb-2">
                        <label class="input input-bordered flex items-center gap-2 flex-1">
                            <Search attr:class="h-4 w-4 opacity-50" />
                            <input
                                type="text"
                                class="grow"
                                placeholder="按标题或发票号搜索"
                                on:input=on_search_input
                                prop:value=search_input
                            />
                        </label>
                        <select class="select select-bordered" on:change=on_status_change>
                            <option value="" selected=move || status.get().is_none()>"全部状态"</option>
                            <option value="draft" selected=move || status.get() == Some(BillStatus::Draft)>"草稿"</option>
                            <option value="unpaid" selected=move || status.get() == Some(BillStatus::Unpaid)>"待付"</option>
                            <option value="paid" selected=move || status.get() == Some(BillStatus::Paid)>"已付"</option>
                            <option value="overdue" selected=move || status.get() == Some(BillStatus::Overdue)>"逾期"</option>
                        </select>
                    </div>

                    <Show when=move || bills_error.get().is_some()>
                        <div role="alert" class="alert alert-error mx-6 my-2">
                            <span>{move || bills_error.get().map(|e| e.message).unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"标题"</th>
                                    <th class="hidden md:table-cell">"供应商"</th>
                                    <th>"金额"</th>
                                    <th class="hidden md:table-cell">"到期日"</th>
                                    <th>"状态"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || row_count() == 0 && !is_loading.get()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            "没有符合条件的账单。"
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || is_loading.get() && row_count() == 0>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " 加载中..."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || bills.data.get().map(|p| p.data).unwrap_or_default()
                                    key=|bill| bill.id.clone()
                                    children=move |bill| {
                                        let id = bill.id.clone();
                                        let vendor_name = bill
                                            .vendor
                                            .as_ref()
                                            .map(|v| v.name.clone())
                                            .unwrap_or_else(|| "—".to_string());
                                        view! {
                                            <tr
                                                class="hover cursor-pointer"
                                                on:click=move |_| router.navigate(&format!("/bills/{}", id))
                                            >
                                                <td>
                                                    <div class="font-medium">{bill.title.clone()}</div>
                                                    <div class="text-xs opacity-50 font-mono">
                                                        {bill.invoice_number.clone().unwrap_or_default()}
                                                    </div>
                                                </td>
                                                <td class="hidden md:table-cell">{vendor_name}</td>
                                                <td class="font-mono">
                                                    {format!("{} {}", bill.amount, bill.currency)}
                                                </td>
                                                <td class="hidden md:table-cell font-mono text-sm">
                                                    {bill.due_date.format("%Y-%m-%d").to_string()}
                                                </td>
                                                <td>
                                                    <span class=status_badge(bill.status)>
                                                        {status_label(bill.status)}
                                                    </span>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>

                    <div class="flex justify-end p-4">
                        <div class="join">
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || page.get() <= 1
                                on:click=move |_| set_page.update(|p| *p -= 1)
                            >
                                <ChevronLeft attr:class="h-4 w-4" />
                            </button>
                            <span class="join-item btn btn-sm btn-ghost no-animation">
                                {move || format!("第 {} / {} 页", page.get(), total_pages().max(1))}
                            </span>
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || page.get() >= total_pages()
                                on:click=move |_| set_page.update(|p| *p += 1)
                            >
                                <ChevronRight attr:class="h-4 w-4" />
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
