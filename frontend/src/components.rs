//! UI 组件层
//!
//! 视图只渲染钩子暴露的状态 (data / loading / error)，
//! 不直接调用服务层。写入副作用（提示、跳转）挂在变更信号上。

pub mod add_bill;
pub mod add_category;
pub mod add_vendor;
pub mod bill_detail;
pub mod bills;
pub mod categories;
pub mod dashboard;
mod icons;
pub mod layout;
pub mod login;
pub mod register;
pub mod settings;
pub mod toast;
pub mod vendors;
