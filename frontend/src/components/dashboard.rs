//! 仪表盘页
//!
//! 统计卡片 + 月度支出 + 分类占比，数据全部来自仪表盘聚合接口。
//! 刷新按钮只是把 dashboard 前缀失效，重新拉取交给缓存层。

use leptos::prelude::*;

use crate::cache::{use_query_client, QueryKey};
use crate::components::icons::{CreditCard, Receipt, RefreshCw, Wallet};
use crate::hooks::dashboard::{
    use_dashboard_stats, use_expenses_by_category, use_expenses_by_month, DEFAULT_MONTHS,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_query_client();
    let stats = use_dashboard_stats();
    let (months, _) = signal(DEFAULT_MONTHS);
    let monthly = use_expenses_by_month(months.into());
    let by_category = use_expenses_by_category();

    let is_loading = stats.is_loading;
    let stats_error = stats.error;

    // 月度柱宽按当期最大值归一
    let monthly_rows = move || {
        let rows = monthly.data.get().unwrap_or_default();
        let max = rows
            .iter()
            .filter_map(|m| m.amount.parse::<f64>().ok())
            .fold(1.0_f64, f64::max);
        rows.into_iter()
            .map(|m| {
                let value = m.amount.parse::<f64>().unwrap_or(0.0);
                (m.month, m.amount, value / max * 100.0)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="max-w-7xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">"仪表盘"</h1>
                    <p class="text-base-content/70 text-sm">"公司支出一览"</p>
                </div>
                <button
                    class="btn btn-ghost btn-circle"
                    on:click=move |_| client.invalidate(&QueryKey::new(["dashboard"]))
                >
                    <RefreshCw attr:class=move || if is_loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                </button>
            </div>

            <Show when=move || stats_error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || stats_error.get().map(|e| e.message).unwrap_or_default()}</span>
                </div>
            </Show>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-primary">
                        <Wallet attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"总支出"</div>
                    <div class="stat-value text-primary text-2xl">
                        {move || stats.data.get().map(|s| s.total_expense).unwrap_or_else(|| "—".into())}
                    </div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-success">
                        <CreditCard attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"本月已付"</div>
                    <div class="stat-value text-success text-2xl">
                        {move || stats.data.get().map(|s| s.paid_this_month).unwrap_or_else(|| "—".into())}
                    </div>
                    <div class="stat-desc">
                        {move || stats.data.get().map(|s| format!("环比 {:+.1}%", s.expense_change_percent)).unwrap_or_default()}
                    </div>
                </div>

                <div class="stat">
                    <div class="stat-figure text-warning">
                        <Receipt attr:class="h-8 w-8" />
                    </div>
                    <div class="stat-title">"待付金额"</div>
                    <div class="stat-value text-warning text-2xl">
                        {move || stats.data.get().map(|s| s.unpaid_amount).unwrap_or_else(|| "—".into())}
                    </div>
                </div>

                <div class="stat">
                    <div class="stat-title">"逾期账单"</div>
                    <div class="stat-value text-error">
                        {move || stats.data.get().map(|s| s.overdue_bills_count).unwrap_or(0)}
                    </div>
                    <div class="stat-desc">"需要尽快处理"</div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"月度支出"</h3>
                        <Show
                            when=move || !monthly_rows().is_empty()
                            fallback=|| view! { <p class="text-base-content/50 py-4">"暂无数据"</p> }
                        >
                            <div class="space-y-2">
                                <For
                                    each=monthly_rows
                                    key=|(month, _, _)| month.clone()
                                    children=|(month, amount, pct)| {
                                        view! {
                                            <div class="flex items-center gap-3">
                                                <span class="w-16 text-xs font-mono opacity-70">{month}</span>
                                                <progress
                                                    class="progress progress-primary flex-1"
                                                    value=format!("{:.1}", pct)
                                                    max="100"
                                                ></progress>
                                                <span class="w-20 text-right text-xs font-mono">{amount}</span>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"分类占比"</h3>
                        <Show
                            when=move || by_category.data.get().is_some_and(|c| !c.is_empty())
                            fallback=|| view! { <p class="text-base-content/50 py-4">"暂无数据"</p> }
                        >
                            <div class="space-y-3">
                                <For
                                    each=move || by_category.data.get().unwrap_or_default()
                                    key=|c| c.category_id.clone()
                                    children=|c| {
                                        view! {
                                            <div class="flex items-center justify-between gap-3">
                                                <span class="text-sm">{c.category_name}</span>
                                                <div class="flex items-center gap-2">
                                                    <span class="font-mono text-sm">{c.amount}</span>
                                                    <span class="badge badge-outline badge-sm">
                                                        {format!("{:.1}%", c.percentage)}
                                                    </span>
                                                </div>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
