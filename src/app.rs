//! App Root Component
//!
//! Main application component with routing, layout shell, and the one-time
//! vendor script installation.

use leptos::*;
use leptos_router::*;

use crate::analytics::{self, ScriptConfig};
use crate::components::{Nav, Toast};
use crate::pages::{Admin, Breeds, Colors, Contact, Faq, Home, Privacy, Puppies, Terms};
use crate::state::site::provide_site_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide toast state to all components
    provide_site_state();

    // Install configured vendor scripts (GTM, GA4, Axeptio, Crisp)
    analytics::install(&ScriptConfig::from_env());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/puppies" view=Puppies />
                        <Route path="/breeds" view=Breeds />
                        <Route path="/colors" view=Colors />
                        <Route path="/faq" view=Faq />
                        <Route path="/contact" view=Contact />
                        <Route path="/privacy" view=Privacy />
                        <Route path="/terms" view=Terms />
                        <Route path="/admin" view=Admin />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with legal links
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-6 px-4">
            <div class="container mx-auto flex flex-col md:flex-row items-center justify-between gap-3 text-sm">
                <span class="text-gray-400">"© 2026 Pawhaven. All rights reserved."</span>

                <div class="flex items-center space-x-4">
                    <A href="/privacy" class="text-gray-400 hover:text-white transition-colors">
                        "Privacy"
                    </A>
                    <A href="/terms" class="text-gray-400 hover:text-white transition-colors">
                        "Terms"
                    </A>
                    <A href="/contact" class="text-gray-400 hover:text-white transition-colors">
                        "Contact"
                    </A>
                </div>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🐕"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"This page has wandered off."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to home"
            </A>
        </div>
    }
}
