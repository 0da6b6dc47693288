//! BillDash 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `api`: 共享 HTTP 客户端（凭据附加、401 会话清理）
//! - `services`: 资源服务层，一方法恰好一次请求
//! - `cache` / `hooks`: 查询缓存与数据访问钩子
//! - `session`: 会话状态管理
//! - `web::route` / `web::router`: 路由定义（领域模型）与路由服务（核心引擎）
//! - `components`: UI 组件层

use std::rc::Rc;

use leptos::prelude::*;

pub mod api;
pub mod cache;
mod components;
pub mod config;
pub mod hooks;
mod logging;
pub mod services;
pub mod session;
pub mod web;

use api::{provide_api, ApiClient, CredentialStore};
use cache::provide_query_client;
use components::add_bill::AddBillPage;
use components::add_category::AddCategoryPage;
use components::add_vendor::AddVendorPage;
use components::bill_detail::BillDetailPage;
use components::bills::BillsPage;
use components::categories::CategoriesPage;
use components::dashboard::DashboardPage;
use components::layout::MainLayout;
use components::login::LoginPage;
use components::register::RegisterPage;
use components::settings::SettingsPage;
use components::toast::{provide_toasts, ToastHost};
use components::vendors::VendorsPage;
use session::provide_session;
use web::http::GlooTransport;
use web::location::BrowserLocation;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet};
use web::storage::BrowserCredentials;

/// 已认证页面统一套主布局
fn shell(page: AnyView) -> AnyView {
    view! { <MainLayout>{page}</MainLayout> }.into_any()
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
/// 守卫已经在路由服务里执行过，这里拿到的路由一定是允许进入的。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => shell(view! { <DashboardPage /> }.into_any()),
        AppRoute::Bills => shell(view! { <BillsPage /> }.into_any()),
        AppRoute::AddBill => shell(view! { <AddBillPage /> }.into_any()),
        AppRoute::BillDetail(id) => shell(view! { <BillDetailPage id=id /> }.into_any()),
        AppRoute::Vendors => shell(view! { <VendorsPage /> }.into_any()),
        AppRoute::AddVendor => shell(view! { <AddVendorPage /> }.into_any()),
        AppRoute::Categories => shell(view! { <CategoriesPage /> }.into_any()),
        AppRoute::AddCategory => shell(view! { <AddCategoryPage /> }.into_any()),
        AppRoute::Settings => shell(view! { <SettingsPage /> }.into_any()),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 浏览器实现接线：传输、凭据、跳转
    let credentials: Rc<dyn CredentialStore> = Rc::new(BrowserCredentials);
    let initial_token = credentials.token();
    let api = ApiClient::new(
        config::api_base_url(),
        Rc::new(GlooTransport),
        credentials,
        Rc::new(BrowserLocation),
    );
    provide_api(api);

    // 2. 查询缓存、会话状态与全局提示
    provide_query_client();
    let session = provide_session(initial_token);
    provide_toasts();

    // 3. 认证状态信号注入路由服务（解耦！）
    let is_authenticated = session.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <ToastHost />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
