//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 仪表盘（首页，需要认证）
    #[default]
    Dashboard,
    /// 账单列表
    Bills,
    /// 新建账单
    AddBill,
    /// 账单详情
    BillDetail(String),
    /// 供应商列表
    Vendors,
    /// 新建供应商
    AddVendor,
    /// 分类列表
    Categories,
    /// 新建分类
    AddCategory,
    /// 个人设置
    Settings,
    /// 登录页（仅限未认证）
    Login,
    /// 注册页（仅限未认证）
    Register,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Dashboard,
            "/bills" => Self::Bills,
            "/bills/add" => Self::AddBill,
            "/vendors" => Self::Vendors,
            "/vendors/add" => Self::AddVendor,
            "/categories" => Self::Categories,
            "/categories/add" => Self::AddCategory,
            "/settings" => Self::Settings,
            "/login" => Self::Login,
            "/register" => Self::Register,
            _ => {
                if let Some(id) = path.strip_prefix("/bills/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Self::BillDetail(id.to_string());
                    }
                }
                Self::NotFound
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Bills => "/bills".to_string(),
            Self::AddBill => "/bills/add".to_string(),
            Self::BillDetail(id) => format!("/bills/{}", id),
            Self::Vendors => "/vendors".to_string(),
            Self::AddVendor => "/vendors/add".to_string(),
            Self::Categories => "/categories".to_string(),
            Self::AddCategory => "/categories/add".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register | Self::NotFound)
    }

    /// 定义已认证用户是否应该离开此路由（登录/注册页）
    pub fn guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录/注册页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/bills"), AppRoute::Bills);
        assert_eq!(AppRoute::from_path("/bills/add"), AppRoute::AddBill);
        assert_eq!(AppRoute::from_path("/vendors"), AppRoute::Vendors);
        assert_eq!(AppRoute::from_path("/vendors/add"), AppRoute::AddVendor);
        assert_eq!(AppRoute::from_path("/categories"), AppRoute::Categories);
        assert_eq!(AppRoute::from_path("/categories/add"), AppRoute::AddCategory);
        assert_eq!(AppRoute::from_path("/settings"), AppRoute::Settings);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
    }

    #[test]
    fn parses_bill_detail_id() {
        assert_eq!(
            AppRoute::from_path("/bills/b42"),
            AppRoute::BillDetail("b42".to_string())
        );
        assert_eq!(
            AppRoute::from_path("/bills/b42").to_path(),
            "/bills/b42"
        );
    }

    #[test]
    fn malformed_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/bills/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/bills/a/b"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn guard_matrix() {
        // 业务页面全部需要认证
        for route in [
            AppRoute::Dashboard,
            AppRoute::Bills,
            AppRoute::AddBill,
            AppRoute::BillDetail("b1".into()),
            AppRoute::Vendors,
            AppRoute::AddVendor,
            AppRoute::Categories,
            AppRoute::AddCategory,
            AppRoute::Settings,
        ] {
            assert!(route.requires_auth(), "{} should require auth", route);
            assert!(!route.guest_only());
        }

        for route in [AppRoute::Login, AppRoute::Register] {
            assert!(!route.requires_auth());
            assert!(route.guest_only(), "{} should be guest only", route);
        }

        assert!(!AppRoute::NotFound.requires_auth());
        assert!(!AppRoute::NotFound.guest_only());
    }

    #[test]
    fn redirect_targets() {
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Dashboard);
        assert_eq!(AppRoute::auth_failure_redirect().to_path(), "/login");
        assert_eq!(AppRoute::auth_success_redirect().to_path(), "/");
    }
}
