//! 主布局
//!
//! 侧边栏导航 + 顶部用户区，所有已认证页面都套在这层里。
//! 导航走路由服务，守卫在那边统一执行。

use leptos::prelude::*;

use crate::components::icons::{LayoutDashboard, LogOut, Receipt, Settings, Store, Tag, Wallet};
use crate::hooks::auth::use_auth;
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let session = use_session();
    let router = use_router();
    let current_route = router.current_route();

    let logout = auth.logout;
    let logout_pending = logout.is_pending;
    let me = auth.user.data;

    // 顶栏用户名：优先 me 查询结果，回退登录时留下的会话快照
    let user_name = move || {
        me.get()
            .or_else(|| session.current_user().get())
            .map(|u| u.name)
            .unwrap_or_default()
    };

    let nav_class = move |target: AppRoute| {
        if current_route.get() == target {
            "active"
        } else {
            ""
        }
    };

    view! {
        <div class="flex min-h-screen bg-base-200">
            <aside class="w-64 bg-base-100 shadow-xl flex flex-col shrink-0">
                <div class="p-4 flex items-center gap-2 border-b border-base-200">
                    <div class="p-2 bg-primary/10 rounded-xl text-primary">
                        <Wallet attr:class="h-6 w-6" />
                    </div>
                    <span class="text-xl font-bold">"BillDash"</span>
                </div>

                <ul class="menu p-4 gap-1 flex-1">
                    <li>
                        <a class=move || nav_class(AppRoute::Dashboard)
                            on:click=move |_| router.navigate("/")>
                            <LayoutDashboard attr:class="h-4 w-4" /> "仪表盘"
                        </a>
                    </li>
                    <li>
                        <a class=move || nav_class(AppRoute::Bills)
                            on:click=move |_| router.navigate("/bills")>
                            <Receipt attr:class="h-4 w-4" /> "账单"
                        </a>
                    </li>
                    <li>
                        <a class=move || nav_class(AppRoute::Vendors)
                            on:click=move |_| router.navigate("/vendors")>
                            <Store attr:class="h-4 w-4" /> "供应商"
                        </a>
                    </li>
                    <li>
                        <a class=move || nav_class(AppRoute::Categories)
                            on:click=move |_| router.navigate("/categories")>
                            <Tag attr:class="h-4 w-4" /> "分类"
                        </a>
                    </li>
                    <li>
                        <a class=move || nav_class(AppRoute::Settings)
                            on:click=move |_| router.navigate("/settings")>
                            <Settings attr:class="h-4 w-4" /> "设置"
                        </a>
                    </li>
                </ul>

                <div class="p-4 border-t border-base-200 flex items-center justify-between gap-2">
                    <span class="text-sm font-medium truncate">{user_name}</span>
                    <button
                        class="btn btn-ghost btn-sm text-error gap-1"
                        disabled=move || logout_pending.get()
                        on:click=move |_| logout.run(())
                    >
                        <LogOut attr:class="h-4 w-4" /> "登出"
                    </button>
                </div>
            </aside>

            <main class="flex-1 p-4 md:p-8 overflow-x-auto">{children()}</main>
        </div>
    }
}
