//! Crisp Chat
//!
//! Loads the Crisp widget and exposes the chat-open command for the
//! contact page.

use wasm_bindgen::JsCast;
use web_sys::Document;

use super::{inject_inline, inject_src};

const LOADER_URL: &str = "https://client.crisp.chat/l.js";

pub fn install(document: &Document, website_id: &str) {
    inject_inline(document, &boot_snippet(website_id));
    inject_src(document, LOADER_URL);
}

fn boot_snippet(website_id: &str) -> String {
    format!(
        "window.$crisp=[];window.CRISP_WEBSITE_ID='{}';",
        website_id
    )
}

/// Ask the Crisp widget to open its chat box. A no-op when the widget is
/// not installed.
pub fn open_chat() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(value) = js_sys::Reflect::get(&window, &"$crisp".into()) else {
        return;
    };
    if let Ok(queue) = value.dyn_into::<js_sys::Array>() {
        let command = js_sys::Array::new();
        command.push(&"do".into());
        command.push(&"chat:open".into());
        queue.push(&command.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_snippet_sets_the_website_id() {
        let snippet = boot_snippet("w-1234");
        assert!(snippet.contains("CRISP_WEBSITE_ID='w-1234'"));
        assert!(snippet.starts_with("window.$crisp=[];"));
    }
}
