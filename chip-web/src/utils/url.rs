//! URL utility functions for reading query parameters

use web_sys::window;

/// Find `key` in a raw query string (with or without the leading `?`).
///
/// Values are percent-decoded; a bare key yields an empty string.
pub fn parse_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    for pair in query_string.split('&').filter(|pair| !pair.is_empty()) {
        let (param_key, param_value) = pair.split_once('=').unwrap_or((pair, ""));
        if param_key == key {
            return Some(
                urlencoding::decode(param_value)
                    .map(|value| value.into_owned())
                    .unwrap_or_else(|_| param_value.to_string()),
            );
        }
    }

    None
}

/// Get a query parameter from the current page URL
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    parse_query_param(&search, key)
}
