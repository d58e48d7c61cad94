//! Google Tag Manager
//!
//! Emits the GTM container snippet and offers a dataLayer event helper.

use wasm_bindgen::JsCast;
use web_sys::Document;

use super::inject_inline;

pub fn install(document: &Document, container_id: &str) {
    inject_inline(document, &container_snippet(container_id));
}

/// The vendor container snippet, verbatim apart from the container ID
fn container_snippet(container_id: &str) -> String {
    format!(
        "(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':\n\
         new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],\n\
         j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=\n\
         'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);\n\
         }})(window,document,'script','dataLayer','{}');",
        container_id
    )
}

/// Push a named event onto the GTM data layer, if GTM is installed
pub fn push_event(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(value) = js_sys::Reflect::get(&window, &"dataLayer".into()) else {
        return;
    };
    if let Ok(data_layer) = value.dyn_into::<js_sys::Array>() {
        let event = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&event, &"event".into(), &name.into());
        data_layer.push(&event.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_snippet_loads_the_container() {
        let snippet = container_snippet("GTM-ABC123");
        assert!(snippet.contains("googletagmanager.com/gtm.js"));
        assert!(snippet.ends_with("'GTM-ABC123');"));
    }
}
