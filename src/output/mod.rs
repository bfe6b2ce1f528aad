//! Response output formatting

/// Render a raw service response for the terminal.
///
/// With `pretty`, valid JSON is re-indented; anything else is printed as is.
pub fn render(raw: &str, pretty: bool) -> String {
    if !pretty {
        return raw.to_string();
    }

    serde_json::from_str::<serde_json::Value>(raw)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| raw.to_string())
}
