// Shared helpers for the components

/// Console logging. Only emits on wasm32; native builds (tests) drop the message.
pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg; // keep param to avoid warnings
}

/// Joins class names, skipping empty entries and whitespace-only ones.
/// Each part may itself hold several space-separated classes.
pub fn class_names<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for class in parts.into_iter().flat_map(str::split_whitespace) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

/// Conditional class helper: yields `name` when `on` is set, otherwise an empty entry.
pub fn class_if(on: bool, name: &str) -> &str {
    if on { name } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_skips_empty() {
        assert_eq!(class_names(["at-badge", "", "  "]), "at-badge");
        assert_eq!(class_names(["a", "b  c", ""]), "a b c");
        assert_eq!(class_names(std::iter::empty()), "");
    }

    #[test]
    fn test_class_if() {
        assert_eq!(
            class_names(["at-image-preview", class_if(true, "at-image-preview-active")]),
            "at-image-preview at-image-preview-active"
        );
        assert_eq!(
            class_names(["at-image-preview", class_if(false, "at-image-preview-active")]),
            "at-image-preview"
        );
    }
}
