//! 持久化凭据
//!
//! `CredentialStore` 的 LocalStorage 实现。
//! 每次请求和每次导航守卫都会重新读取，不在内存里另存一份。

use billdash_shared::{STORAGE_TOKEN_KEY, STORAGE_USER_KEY};
use gloo_storage::{LocalStorage, Storage};

use crate::api::CredentialStore;

pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn token(&self) -> Option<String> {
        LocalStorage::get(STORAGE_TOKEN_KEY).ok()
    }

    fn store(&self, token: &str) {
        let _ = LocalStorage::set(STORAGE_TOKEN_KEY, token);
    }

    fn clear(&self) {
        LocalStorage::delete(STORAGE_TOKEN_KEY);
        // 旧版本还会缓存用户快照，一并清掉
        LocalStorage::delete(STORAGE_USER_KEY);
    }
}
