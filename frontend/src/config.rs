//! 运行配置
//!
//! API 地址在编译期通过 `BILLDASH_API_URL` 注入，默认指向本地开发后端。

const DEFAULT_API_URL: &str = "http://localhost:8080/api";

pub fn api_base_url() -> String {
    option_env!("BILLDASH_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
