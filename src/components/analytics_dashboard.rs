//! Analytics Dashboard
//!
//! GA4 reporting for the admin console. Checks the backend configuration
//! status before fetching anything, renders the comprehensive snapshot for
//! the selected date range, and optionally auto-refreshes every 60 seconds.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::api;
use crate::api::types::{AnalyticsSnapshot, DateRange};
use crate::format;
use crate::state::refresh::{FetchSequence, Poller};

use super::loading::{CardSkeleton, Loading};
use super::trend_chart::TrendChart;

const AUTO_REFRESH_MS: u32 = 60_000;

/// GA4 analytics dashboard
#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    // None until the first status check resolves
    let (configured, set_configured) = create_signal(None::<bool>);
    let (snapshot, set_snapshot) = create_signal(None::<AnalyticsSnapshot>);
    let (range, set_range) = create_signal(DateRange::DEFAULT);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (auto_refresh, set_auto_refresh) = create_signal(false);
    let (last_refreshed, set_last_refreshed) = create_signal(None::<String>);

    let sequence = FetchSequence::new();

    let load = {
        let sequence = sequence.clone();
        move || {
            let ticket = sequence.begin();
            let sequence = sequence.clone();
            let selected = range.get_untracked();

            set_loading.set(true);
            spawn_local(async move {
                match api::fetch_analytics_status().await {
                    Ok(status) if !status.configured => {
                        if sequence.is_current(ticket) {
                            set_configured.set(Some(false));
                            set_loading.set(false);
                        }
                        return;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        if sequence.is_current(ticket) {
                            set_error.set(Some(e));
                            set_loading.set(false);
                        }
                        return;
                    }
                }

                let result = api::fetch_analytics_comprehensive(selected).await;

                // A newer request superseded this one; drop the response
                if !sequence.is_current(ticket) {
                    return;
                }

                set_configured.set(Some(true));
                match result {
                    Ok(snap) => {
                        set_snapshot.set(Some(snap));
                        set_error.set(None);
                        set_last_refreshed.set(Some(
                            chrono::Local::now().format("%H:%M:%S").to_string(),
                        ));
                    }
                    Err(e) => {
                        set_error.set(Some(e));
                    }
                }
                set_loading.set(false);
            });
        }
    };

    // Fetch on mount
    let load_for_mount = load.clone();
    create_effect(move |_| load_for_mount());

    // Range preset buttons re-fetch immediately
    let load_for_range = load.clone();
    let select_range = move |preset: DateRange| {
        set_range.set(preset);
        load_for_range();
    };

    // Auto-refresh poller, owned here and cancelled on teardown
    let poller: Rc<RefCell<Option<Poller>>> = Rc::new(RefCell::new(None));

    let toggle_auto_refresh = {
        let poller = Rc::clone(&poller);
        let load = load.clone();
        move |ev: web_sys::Event| {
            let enabled = event_target_checked(&ev);
            set_auto_refresh.set(enabled);

            if enabled {
                let tick = load.clone();
                *poller.borrow_mut() = Some(Poller::start(AUTO_REFRESH_MS, move || tick()));
            } else if let Some(active) = poller.borrow_mut().take() {
                active.cancel();
            }
        }
    };

    {
        let poller = Rc::clone(&poller);
        on_cleanup(move || {
            if let Some(active) = poller.borrow_mut().take() {
                active.cancel();
            }
        });
    }

    let refresh = load.clone();
    let retry = load;

    view! {
        <section class="space-y-6">
            // Header with range and refresh controls
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h2 class="text-xl font-semibold">"Analytics"</h2>
                    <p class="text-gray-400 text-sm mt-1">
                        {move || range.get().label()}
                    </p>
                </div>

                <div class="flex flex-wrap items-center gap-3">
                    <div class="flex space-x-2">
                        {DateRange::PRESETS.into_iter().map(|preset| {
                            let select = select_range.clone();
                            view! {
                                <button
                                    on:click=move |_| select(preset)
                                    class=move || {
                                        let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                                        if range.get() == preset {
                                            format!("{} bg-primary-600 text-white", base)
                                        } else {
                                            format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                                        }
                                    }
                                >
                                    {format!("{}D", preset.days)}
                                </button>
                            }
                        }).collect_view()}
                    </div>

                    <label class="flex items-center space-x-2 text-sm text-gray-400">
                        <input
                            type="checkbox"
                            prop:checked=move || auto_refresh.get()
                            on:change=toggle_auto_refresh
                        />
                        <span>"Auto-refresh"</span>
                    </label>

                    {move || {
                        last_refreshed.get().map(|at| view! {
                            <span class="text-gray-500 text-sm">{format!("Updated {}", at)}</span>
                        })
                    }}

                    <button
                        on:click=move |_| refresh()
                        disabled=move || loading.get()
                        class="px-3 py-2 bg-gray-700 hover:bg-gray-600 disabled:bg-gray-700/50
                               rounded-lg text-sm font-medium transition-colors"
                    >
                        {move || if loading.get() { "Refreshing..." } else { "Refresh" }}
                    </button>
                </div>
            </div>

            // Configuration gate
            {move || {
                match configured.get() {
                    None => {
                        if let Some(message) = error.get() {
                            let retry = retry.clone();
                            view! {
                                <div class="bg-gray-800 rounded-xl p-6 text-center">
                                    <p class="text-red-400">{message}</p>
                                    <button
                                        on:click=move |_| retry()
                                        class="mt-4 px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                                    >
                                        "Try again"
                                    </button>
                                </div>
                            }.into_view()
                        } else {
                            view! { <Loading /> }.into_view()
                        }
                    }
                    Some(false) => view! { <SetupInstructions /> }.into_view(),
                    Some(true) => view! {
                        <SnapshotBody snapshot=snapshot error=error />
                    }.into_view(),
                }
            }}
        </section>
    }
}

/// Dashboard body once analytics is known to be configured
#[component]
fn SnapshotBody(
    snapshot: ReadSignal<Option<AnalyticsSnapshot>>,
    error: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            {move || {
                error.get().map(|message| view! {
                    <div class="bg-red-900/40 border border-red-700 text-red-300 text-sm rounded-lg px-4 py-3">
                        {message}
                    </div>
                })
            }}

            {move || {
                let Some(snap) = snapshot.get() else {
                    return view! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            {(0..8).map(|_| view! { <CardSkeleton /> }).collect_view()}
                        </div>
                    }.into_view();
                };

                let daily = snap.daily.clone();
                let conversions_total = snap.conversions.iter().map(|c| c.count).sum::<u64>();

                let page_rows: Vec<(String, u64)> =
                    snap.top_pages.iter().map(|p| (p.path.clone(), p.views)).collect();
                let source_rows: Vec<(String, u64)> =
                    snap.sources.iter().map(|s| (s.source.clone(), s.sessions)).collect();
                let device_rows: Vec<(String, u64)> =
                    snap.devices.iter().map(|d| (d.device.clone(), d.sessions)).collect();
                let country_rows: Vec<(String, u64)> =
                    snap.countries.iter().map(|c| (c.country.clone(), c.sessions)).collect();
                let age_rows: Vec<(String, u64)> =
                    snap.demographics.age_groups.iter().map(|b| (b.bucket.clone(), b.users)).collect();
                let gender_rows: Vec<(String, u64)> =
                    snap.demographics.genders.iter().map(|b| (b.bucket.clone(), b.users)).collect();
                let landing_rows: Vec<(String, u64)> =
                    snap.landing_pages.iter().map(|p| (p.path.clone(), p.views)).collect();
                let exit_rows: Vec<(String, u64)> =
                    snap.exit_pages.iter().map(|p| (p.path.clone(), p.views)).collect();
                let event_rows: Vec<(String, u64)> =
                    snap.events.iter().map(|e| (e.name.clone(), e.count)).collect();
                let conversion_rows: Vec<(String, u64)> =
                    snap.conversions.iter().map(|c| (c.name.clone(), c.count)).collect();

                view! {
                    // Key metrics
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <StatCard
                            label="Realtime users"
                            value=format::abbreviate(snap.realtime_users as f64)
                        />
                        <StatCard
                            label="Sessions"
                            value=format::abbreviate(snap.totals.sessions as f64)
                        />
                        <StatCard
                            label="Users"
                            value=format::abbreviate(snap.totals.users as f64)
                        />
                        <StatCard
                            label="New users"
                            value=format::abbreviate(snap.totals.new_users as f64)
                        />
                        <StatCard
                            label="Pageviews"
                            value=format::abbreviate(snap.totals.pageviews as f64)
                        />
                        <StatCard
                            label="Avg session"
                            value=format::duration(snap.totals.avg_session_duration)
                        />
                        <StatCard
                            label="Bounce rate"
                            value=format::percent(snap.totals.bounce_rate)
                        />
                        <StatCard
                            label="Conversions"
                            value=format::abbreviate(conversions_total as f64)
                        />
                    </div>

                    // Traffic trend
                    <div class="bg-gray-800 rounded-xl p-6">
                        <h3 class="text-lg font-semibold mb-4">"Traffic"</h3>
                        <TrendChart daily=Signal::derive(move || daily.clone()) />
                    </div>

                    // Acquisition and content
                    <div class="grid md:grid-cols-2 gap-6">
                        <RankedList
                            title="Top pages"
                            rows=page_rows
                        />
                        <RankedList
                            title="Traffic sources"
                            rows=source_rows
                        />
                        <RankedList
                            title="Devices"
                            rows=device_rows
                        />
                        <RankedList
                            title="Countries"
                            rows=country_rows
                        />
                    </div>

                    // Audience
                    <div class="grid md:grid-cols-2 gap-6">
                        <RankedList
                            title="Age groups"
                            rows=age_rows
                        />
                        <RankedList
                            title="Gender"
                            rows=gender_rows
                        />
                    </div>

                    // Behavior
                    <div class="grid md:grid-cols-2 gap-6">
                        <RankedList
                            title="Landing pages"
                            rows=landing_rows
                        />
                        <RankedList
                            title="Exit pages"
                            rows=exit_rows
                        />
                        <RankedList
                            title="Events"
                            rows=event_rows
                        />
                        <RankedList
                            title="Conversions"
                            rows=conversion_rows
                        />
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Single key-metric card
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{value}</div>
        </div>
    }
}

/// Ranked label/count list with proportional bars
#[component]
fn RankedList(
    title: &'static str,
    rows: Vec<(String, u64)>,
) -> impl IntoView {
    let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">{title}</h3>

            {if rows.is_empty() {
                view! {
                    <p class="text-gray-400 text-sm">"No data for this range"</p>
                }.into_view()
            } else {
                rows.into_iter().map(|(label, count)| {
                    let width = count * 100 / max;
                    view! {
                        <div class="py-1.5">
                            <div class="flex items-center justify-between text-sm">
                                <span class="text-gray-300 truncate pr-2">{label}</span>
                                <span class="font-semibold">{format::abbreviate(count as f64)}</span>
                            </div>
                            <div class="bg-gray-700 rounded h-1.5 mt-1">
                                <div
                                    class="bg-primary-500 rounded h-1.5"
                                    style=format!("width: {}%", width)
                                />
                            </div>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Shown when the backend reports GA4 as unconfigured
#[component]
fn SetupInstructions() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-2">"Analytics is not configured"</h3>
            <p class="text-gray-400 mb-4">
                "Connect a Google Analytics 4 property to see traffic reporting here."
            </p>
            <ol class="list-decimal list-inside space-y-1 text-sm text-gray-300">
                <li>"Create a GA4 property and a service account with Viewer access"</li>
                <li>"Upload the service-account key to the API server"</li>
                <li>"Set the property ID in the API server configuration"</li>
                <li>"Reload this page"</li>
            </ol>
        </div>
    }
}
