//! Form event helpers.
//!
//! Pull the current value out of input/select/textarea events without
//! repeating the cast dance in every handler.

use wasm_bindgen::JsCast;

pub fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.value()))
        .unwrap_or_default()
}

pub fn checkbox_checked(ev: &web_sys::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().map(|i| i.checked()))
        .unwrap_or(false)
}

pub fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlSelectElement>().map(|s| s.value()))
        .unwrap_or_default()
}

pub fn textarea_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlTextAreaElement>().map(|t| t.value()))
        .unwrap_or_default()
}

/// First file of a file input, if any.
pub fn picked_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().and_then(|i| i.files()))
        .and_then(|files| files.get(0))
}

/// Turn an empty trimmed string into None for optional payload fields.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_maps_blank_to_none() {
        assert_eq!(optional("  "), None);
        assert_eq!(optional(" x "), Some("x".to_string()));
    }
}
