//! 资源服务层
//!
//! 每个资源一个服务，每个方法恰好对应一次 HTTP 调用，
//! 负责拼路径、带参数、拆响应信封，除此之外没有副作用。

pub mod auth;
pub mod bills;
pub mod categories;
pub mod dashboard;
pub mod users;
pub mod vendors;
