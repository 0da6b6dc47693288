//! 原生浏览器接口封装模块
//!
//! `api` 模块的三个注入接口（传输、凭据、跳转）在这里落地为
//! 浏览器实现；路由的领域模型与核心引擎也在这里。
//! 除 `route` 外都依赖 DOM 环境，单元测试使用 `api` 模块的 Mock。

pub mod http;
pub mod location;
pub mod route;
pub mod router;
pub mod storage;
