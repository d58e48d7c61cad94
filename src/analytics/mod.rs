//! Third-Party Script Integrations
//!
//! Configuration-driven installers for the vendor scripts the site embeds:
//! Google Tag Manager, GA4, Axeptio consent management, and Crisp chat.
//! Each installer reproduces the vendor's documented initialization
//! sequence and is a no-op when its ID is not configured.

pub mod axeptio;
pub mod crisp;
pub mod ga4;
pub mod gtm;

use web_sys::Document;

/// Vendor configuration, resolved at build time
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptConfig {
    pub gtm_container_id: Option<&'static str>,
    pub ga4_measurement_id: Option<&'static str>,
    pub axeptio_client_id: Option<&'static str>,
    pub axeptio_cookies_version: Option<&'static str>,
    pub crisp_website_id: Option<&'static str>,
}

impl ScriptConfig {
    /// Read configuration from build-time environment variables
    pub fn from_env() -> Self {
        Self {
            gtm_container_id: option_env!("PAWHAVEN_GTM_ID"),
            ga4_measurement_id: option_env!("PAWHAVEN_GA4_ID"),
            axeptio_client_id: option_env!("PAWHAVEN_AXEPTIO_CLIENT_ID"),
            axeptio_cookies_version: option_env!("PAWHAVEN_AXEPTIO_COOKIES_VERSION"),
            crisp_website_id: option_env!("PAWHAVEN_CRISP_WEBSITE_ID"),
        }
    }
}

/// Install all configured vendor scripts. Called once from the app root.
pub fn install(config: &ScriptConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(id) = config.gtm_container_id {
        gtm::install(&document, id);
    }
    if let Some(id) = config.ga4_measurement_id {
        ga4::install(&document, id);
    }
    if let Some(id) = config.axeptio_client_id {
        let version = config.axeptio_cookies_version.unwrap_or("default");
        axeptio::install(&document, id, version);
    }
    if let Some(id) = config.crisp_website_id {
        crisp::install(&document, id);
    }
}

/// Append an inline script element to `<head>`
pub(crate) fn inject_inline(document: &Document, code: &str) {
    if let (Ok(script), Some(head)) = (document.create_element("script"), document.head()) {
        script.set_text_content(Some(code));
        let _ = head.append_child(&script);
    }
}

/// Append an async external script element to `<head>`
pub(crate) fn inject_src(document: &Document, src: &str) {
    if let (Ok(script), Some(head)) = (document.create_element("script"), document.head()) {
        let _ = script.set_attribute("src", src);
        let _ = script.set_attribute("async", "");
        let _ = head.append_child(&script);
    }
}
