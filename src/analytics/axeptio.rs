//! Axeptio Consent Management
//!
//! Emits the Axeptio settings object, loads the SDK, and registers the
//! vendor-documented bridge that forwards consent choices to gtag.

use web_sys::Document;

use super::{inject_inline, inject_src};

const SDK_URL: &str = "https://static.axept.io/sdk.js";

/// Bridge snippet from the Axeptio + Google Consent Mode documentation
const CONSENT_BRIDGE: &str = "\
void 0 === window._axcb && (window._axcb = []);\n\
window._axcb.push(function(axeptio) {\n\
  axeptio.on('cookies:complete', function(choices) {\n\
    if (window.gtag) {\n\
      gtag('consent', 'update', {\n\
        analytics_storage: choices.google_analytics ? 'granted' : 'denied',\n\
        ad_storage: choices.google_ads ? 'granted' : 'denied'\n\
      });\n\
    }\n\
  });\n\
});";

pub fn install(document: &Document, client_id: &str, cookies_version: &str) {
    inject_inline(document, &settings_snippet(client_id, cookies_version));
    inject_inline(document, CONSENT_BRIDGE);
    inject_src(document, SDK_URL);
}

fn settings_snippet(client_id: &str, cookies_version: &str) -> String {
    format!(
        "window.axeptioSettings = {{\n\
           clientId: '{}',\n\
           cookiesVersion: '{}'\n\
         }};",
        client_id, cookies_version
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_snippet_carries_client_configuration() {
        let snippet = settings_snippet("abc123", "pawhaven-en");
        assert!(snippet.contains("clientId: 'abc123'"));
        assert!(snippet.contains("cookiesVersion: 'pawhaven-en'"));
    }

    #[test]
    fn bridge_updates_consent_state() {
        assert!(CONSENT_BRIDGE.contains("cookies:complete"));
        assert!(CONSENT_BRIDGE.contains("analytics_storage"));
    }
}
