//! Applications Panel
//!
//! Read-only table of adoption applications. Fetches on mount and re-fetches
//! every 30 seconds while mounted; the poller is cancelled on unmount.

use leptos::*;

use crate::api;
use crate::api::types::Application;
use crate::state::refresh::Poller;

use super::loading::ListSkeleton;

const POLL_INTERVAL_MS: u32 = 30_000;

/// Adoption applications panel
#[component]
pub fn ApplicationsPanel() -> impl IntoView {
    let (applications, set_applications) = create_signal(Vec::<Application>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let load = move || {
        spawn_local(async move {
            match api::fetch_applications().await {
                Ok(rows) => {
                    set_applications.set(rows);
                    // A successful tick clears any earlier poll failure
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch applications: {}", e).into(),
                    );
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Initial fetch on mount
    create_effect(move |_| load());

    // Re-fetch on a fixed cadence while the panel is mounted
    let poller = Poller::start(POLL_INTERVAL_MS, load);
    on_cleanup(move || poller.cancel());

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Applications"</h2>
                <span class="text-gray-500 text-sm">"Refreshes every 30s"</span>
            </div>

            // Poll failure banner; last good rows stay visible below
            {move || {
                error.get().map(|message| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3 mb-4">
                        {message}
                    </div>
                })
            }}

            {move || {
                if loading.get() {
                    return view! { <ListSkeleton count=4 /> }.into_view();
                }

                let rows = applications.get();
                if rows.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-center py-12">"No applications yet."</p>
                    }.into_view();
                }

                view! {
                    <table class="w-full text-left">
                        <thead>
                            <tr class="text-gray-400 text-sm border-b border-gray-700">
                                <th class="py-2 pr-4">"Application"</th>
                                <th class="py-2 pr-4">"Applicant"</th>
                                <th class="py-2 pr-4">"Email"</th>
                                <th class="py-2 pr-4">"Status"</th>
                                <th class="py-2">"Submitted"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|application| view! {
                                <tr class="border-b border-gray-700 last:border-0">
                                    <td class="py-3 pr-4 font-mono text-sm">{application.display_id.clone()}</td>
                                    <td class="py-3 pr-4 font-medium">{application.name.clone()}</td>
                                    <td class="py-3 pr-4 text-gray-300">{application.email.clone()}</td>
                                    <td class="py-3 pr-4">
                                        <span class=format!(
                                            "{} text-xs px-2 py-0.5 rounded-full text-white",
                                            application.status.badge_class()
                                        )>
                                            {application.status.label()}
                                        </span>
                                    </td>
                                    <td class="py-3 text-gray-400 text-sm">{application.submitted_label()}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </section>
    }
}
