use billdash_shared::error::ApiError;
use serde_json::json;

use super::*;

const STALE_TIME: i64 = 30_000;

fn key(segments: &[&str]) -> QueryKey {
    QueryKey::new(segments.iter().copied())
}

#[test]
fn key_prefix_matching() {
    let list = key(&["bills", "list"]).with(2).with(10);
    assert!(list.starts_with(&key(&["bills"])));
    assert!(list.starts_with(&key(&["bills", "list"])));
    assert!(!list.starts_with(&key(&["vendors"])));
    // 前缀比自身长时不命中
    assert!(!key(&["bills"]).starts_with(&list));
    assert_eq!(list.to_string(), "bills/list/2/10");
}

#[test]
fn miss_then_insert_then_fresh() {
    let mut store = CacheStore::new();
    let k = key(&["vendors"]);

    assert_eq!(store.read(&k, STALE_TIME, 0), ReadState::Miss);

    store.insert(&k, json!([1, 2]), 1_000);
    assert_eq!(
        store.read(&k, STALE_TIME, 2_000),
        ReadState::Fresh(json!([1, 2]))
    );
}

#[test]
fn entry_goes_stale_after_stale_time() {
    let mut store = CacheStore::new();
    let k = key(&["vendors"]);
    store.insert(&k, json!("v"), 1_000);

    assert_eq!(
        store.read(&k, STALE_TIME, 1_000 + STALE_TIME - 1),
        ReadState::Fresh(json!("v"))
    );
    assert_eq!(
        store.read(&k, STALE_TIME, 1_000 + STALE_TIME),
        ReadState::Stale(json!("v"))
    );
}

#[test]
fn begin_fetch_dedups_concurrent_reads() {
    let mut store = CacheStore::new();
    let k = key(&["bills", "list"]);

    assert!(store.begin_fetch(&k));
    // 第二个消费者共享同一在途请求
    assert!(!store.begin_fetch(&k));
    assert_eq!(store.read(&k, STALE_TIME, 0), ReadState::InFlight);

    store.insert(&k, json!([]), 100);
    assert_eq!(store.read(&k, STALE_TIME, 200), ReadState::Fresh(json!([])));
    // 完成后可以再次占用
    assert!(store.begin_fetch(&k));
}

#[test]
fn invalidate_prefix_marks_matching_entries_stale() {
    let mut store = CacheStore::new();
    store.insert(&key(&["bills", "list"]), json!("page"), 1_000);
    store.insert(&key(&["bills", "b1"]), json!("detail"), 1_000);
    store.insert(&key(&["vendors"]), json!("other"), 1_000);

    let count = store.invalidate_prefix(&key(&["bills"]));
    assert_eq!(count, 2);

    assert_eq!(
        store.read(&key(&["bills", "list"]), STALE_TIME, 1_001),
        ReadState::Stale(json!("page"))
    );
    assert_eq!(
        store.read(&key(&["bills", "b1"]), STALE_TIME, 1_001),
        ReadState::Stale(json!("detail"))
    );
    // 无关条目不受影响
    assert_eq!(
        store.read(&key(&["vendors"]), STALE_TIME, 1_001),
        ReadState::Fresh(json!("other"))
    );
}

#[test]
fn failed_entry_stays_failed_until_invalidated() {
    let mut store = CacheStore::new();
    let k = key(&["auth", "me"]);

    assert!(store.begin_fetch(&k));
    store.fail(&k, ApiError::server("boom"));

    // 不重试：读取结果固定为 Failed
    assert_eq!(
        store.read(&k, STALE_TIME, 10_000),
        ReadState::Failed(ApiError::server("boom"))
    );

    // 失效后条目回到 Miss（无旧值），允许重新拉取
    store.invalidate_prefix(&key(&["auth"]));
    assert_eq!(store.read(&k, STALE_TIME, 10_000), ReadState::Miss);
    assert!(store.begin_fetch(&k));
}

#[test]
fn failure_keeps_previous_value_hidden_behind_error() {
    let mut store = CacheStore::new();
    let k = key(&["dashboard", "stats"]);
    store.insert(&k, json!({"total": "10.00"}), 1_000);

    store.fail(&k, ApiError::network("offline"));
    assert_eq!(
        store.read(&k, STALE_TIME, 1_001),
        ReadState::Failed(ApiError::network("offline"))
    );

    // 失效清除错误，旧值以过期状态重新可见
    store.invalidate_prefix(&key(&["dashboard"]));
    assert_eq!(
        store.read(&k, STALE_TIME, 1_001),
        ReadState::Stale(json!({"total": "10.00"}))
    );
}

#[test]
fn clear_removes_everything() {
    let mut store = CacheStore::new();
    store.insert(&key(&["bills", "list"]), json!([]), 0);
    store.insert(&key(&["auth", "me"]), json!({}), 0);
    assert_eq!(store.len(), 2);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.read(&key(&["auth", "me"]), STALE_TIME, 0), ReadState::Miss);
}
