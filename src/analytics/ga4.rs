//! Google Analytics 4
//!
//! Emits the gtag.js loader and config snippet exactly as the GA4 install
//! instructions prescribe.

use web_sys::Document;

use super::{inject_inline, inject_src};

pub fn install(document: &Document, measurement_id: &str) {
    inject_src(
        document,
        &format!("https://www.googletagmanager.com/gtag/js?id={}", measurement_id),
    );
    inject_inline(document, &config_snippet(measurement_id));
}

fn config_snippet(measurement_id: &str) -> String {
    format!(
        "window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{}');",
        measurement_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_snippet_targets_the_measurement_id() {
        let snippet = config_snippet("G-TEST123");
        assert!(snippet.contains("gtag('config', 'G-TEST123')"));
        assert!(snippet.contains("window.dataLayer"));
    }
}
