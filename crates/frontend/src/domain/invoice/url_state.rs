//! URL-writer collaborator: keeps the address bar in sync with the filter
//! and customer state without creating history entries. The pure mapping
//! between filters and query parameters lives in `contracts`.

use std::collections::{BTreeMap, HashMap};

use web_sys::window;

/// Current query string as a key -> value map.
pub fn read_query_params() -> HashMap<String, String> {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Set or delete query parameters in place. `None` (or an empty value)
/// deletes the parameter; other parameters are left untouched.
pub fn update_url_params(params: &[(&str, Option<String>)]) {
    let Some(w) = window() else {
        return;
    };

    let search = w.location().search().unwrap_or_default();
    let mut query: BTreeMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

    for (key, value) in params {
        match value {
            Some(v) if !v.is_empty() => {
                query.insert((*key).to_string(), v.clone());
            }
            _ => {
                query.remove(*key);
            }
        }
    }

    let pathname = w.location().pathname().unwrap_or_else(|_| "/".to_string());
    let query_string = serde_qs::to_string(&query).unwrap_or_default();
    let new_url = if query_string.is_empty() {
        pathname
    } else {
        format!("{}?{}", pathname, query_string)
    };

    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}
