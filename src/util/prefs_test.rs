#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn local_storage_get_is_none_off_browser() {
    assert_eq!(LocalStorage.get("theme"), None);
}

#[test]
fn local_storage_set_is_noop_but_callable() {
    LocalStorage.set("theme", "dark");
    assert_eq!(LocalStorage.get("theme"), None);
}
