//! Pawhaven Website
//!
//! Public website and admin console for the Pawhaven puppy-adoption
//! business, built with Leptos (WASM).
//!
//! # Features
//!
//! - Marketing and catalog pages (breeds, coat colors, FAQ)
//! - Admin console for puppies and adoption applications
//! - GA4 analytics dashboard with auto-refresh
//! - Third-party integrations (GTM, GA4, Axeptio consent, Crisp chat)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All dynamic data comes from the Pawhaven REST API over HTTP;
//! the site itself holds no state beyond what each view fetches.

use leptos::*;

mod analytics;
mod api;
mod app;
mod catalog;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
