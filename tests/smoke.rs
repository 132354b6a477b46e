//! Integration smoke tests for `markify`

use markify::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
    assert_eq!(v, env!("CARGO_PKG_VERSION"));
}
