//! Admin Page
//!
//! Admin console: session gate plus the puppies, applications, and
//! analytics panels. This page owns the admin session lifecycle.

use leptos::*;

use crate::components::{AnalyticsDashboard, ApplicationsPanel, PuppiesPanel};
use crate::state::session::SessionState;
use crate::state::site::SiteState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Puppies,
    Applications,
    Analytics,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [
        AdminTab::Puppies,
        AdminTab::Applications,
        AdminTab::Analytics,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Puppies => "Puppies",
            AdminTab::Applications => "Applications",
            AdminTab::Analytics => "Analytics",
        }
    }
}

/// Admin console page
#[component]
pub fn Admin() -> impl IntoView {
    // Single owner of the admin session lifecycle
    let session_state = SessionState::restore();

    view! {
        <div class="space-y-8">
            {move || {
                if session_state.current().is_some() {
                    view! { <Console session_state=session_state /> }.into_view()
                } else {
                    view! { <LoginGate session_state=session_state /> }.into_view()
                }
            }}
        </div>
    }
}

/// Authenticated console with tabbed panels
#[component]
fn Console(session_state: SessionState) -> impl IntoView {
    let site = use_context::<SiteState>().expect("SiteState not found");
    let (tab, set_tab) = create_signal(AdminTab::Puppies);

    let logout = move |_| {
        session_state.logout();
        site.show_success("Signed out");
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Admin Console"</h1>
                    <p class="text-gray-400 mt-1">"Manage puppies, applications, and reporting"</p>
                </div>
                <button
                    on:click=logout
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Sign out"
                </button>
            </div>

            // Tab bar
            <div class="flex space-x-2">
                {AdminTab::ALL.into_iter().map(|entry| view! {
                    <button
                        on:click=move |_| set_tab.set(entry)
                        class=move || {
                            let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                            if tab.get() == entry {
                                format!("{} bg-primary-600 text-white", base)
                            } else {
                                format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                            }
                        }
                    >
                        {entry.label()}
                    </button>
                }).collect_view()}
            </div>

            // Active panel; switching tabs unmounts the old one and its timers
            {move || {
                match tab.get() {
                    AdminTab::Puppies => {
                        session_state.current().map(|session| view! {
                            <PuppiesPanel session=session />
                        }).into_view()
                    }
                    AdminTab::Applications => view! { <ApplicationsPanel /> }.into_view(),
                    AdminTab::Analytics => view! { <AnalyticsDashboard /> }.into_view(),
                }
            }}
        </div>
    }
}

/// Token entry form shown while signed out
#[component]
fn LoginGate(session_state: SessionState) -> impl IntoView {
    let site = use_context::<SiteState>().expect("SiteState not found");
    let (token, set_token) = create_signal(String::new());
    let (gate_error, set_gate_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let value = token.get();
        let value = value.trim();
        if value.is_empty() {
            set_gate_error.set(Some("Enter the admin token".to_string()));
            return;
        }

        session_state.login(value);
        site.show_success("Signed in");
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 mt-12">
            <h1 class="text-2xl font-bold mb-2">"Admin sign-in"</h1>
            <p class="text-gray-400 text-sm mb-6">"Enter the admin token to manage the site."</p>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Admin token"</label>
                    <input
                        type="password"
                        placeholder="Paste token"
                        prop:value=move || token.get()
                        on:input=move |ev| set_token.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                {move || gate_error.get().map(|message| view! {
                    <p class="text-red-400 text-sm">{message}</p>
                })}

                <button
                    type="submit"
                    class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
