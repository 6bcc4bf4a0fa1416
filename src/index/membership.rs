//! Membership check consumed by other server-side logic before trusting an id list.

use super::store::IndexStore;

use serde_json::Value;

/// Returns `true` iff `ids` is an array and every string element is indexed.
///
/// Non-string elements are ignored and count as satisfied. Anything that is not
/// an array is rejected outright.
pub fn is_indexed(index: &IndexStore, ids: &Value) -> bool {
    let Some(ids) = ids.as_array() else {
        return false;
    };

    ids.iter()
        .filter_map(Value::as_str)
        .all(|id| index.contains(id))
}
