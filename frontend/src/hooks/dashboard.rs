//! 仪表盘数据访问钩子（只读）

use billdash_shared::{CategoryExpense, DashboardStats, MonthlyExpense};
use leptos::prelude::*;

use crate::api::use_api;
use crate::cache::QueryKey;
use crate::hooks::{use_query, QueryOptions, QueryResult};
use crate::services::dashboard::DashboardService;

/// 月度曲线默认回看 12 个月
pub const DEFAULT_MONTHS: u32 = 12;

pub fn use_dashboard_stats() -> QueryResult<DashboardStats> {
    let service = DashboardService::new(use_api());
    use_query(
        || QueryKey::new(["dashboard", "stats"]),
        move || {
            let service = service.clone();
            async move { service.stats().await }
        },
        QueryOptions::default(),
    )
}

pub fn use_expenses_by_month(months: Signal<u32>) -> QueryResult<Vec<MonthlyExpense>> {
    let service = DashboardService::new(use_api());
    use_query(
        move || QueryKey::new(["dashboard", "expenses-by-month"]).with(months.get()),
        move || {
            let service = service.clone();
            let months = months.get_untracked();
            async move { service.expenses_by_month(months).await }
        },
        QueryOptions::default(),
    )
}

pub fn use_expenses_by_category() -> QueryResult<Vec<CategoryExpense>> {
    let service = DashboardService::new(use_api());
    use_query(
        || QueryKey::new(["dashboard", "expenses-by-category"]),
        move || {
            let service = service.clone();
            async move { service.expenses_by_category().await }
        },
        QueryOptions::default(),
    )
}
