//! Puppies Panel
//!
//! Admin list-and-mutate panel for the puppy inventory. Fetches the list on
//! mount and lets staff change a puppy's status inline; a successful change
//! is merged into local state without a re-fetch.

use leptos::*;

use crate::api;
use crate::api::types::{Puppy, PuppyStatus};
use crate::state::session::AdminSession;
use crate::state::site::SiteState;

use super::loading::Loading;

/// Merge an updated record's status into the fetched rows. Only the
/// matching row changes; unknown ids are ignored.
fn apply_update(rows: &mut [Puppy], updated: &Puppy) {
    if let Some(row) = rows.iter_mut().find(|p| p.id == updated.id) {
        row.status = updated.status;
    }
}

/// Puppy inventory panel
#[component]
pub fn PuppiesPanel(session: AdminSession) -> impl IntoView {
    let site = use_context::<SiteState>().expect("SiteState not found");

    let (puppies, set_puppies) = create_signal(Vec::<Puppy>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    // Id of the row with a PATCH in flight
    let (updating, set_updating) = create_signal(None::<String>);
    // Per-row mutation error: (id, server message)
    let (row_error, set_row_error) = create_signal(None::<(String, String)>);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_puppies().await {
                Ok(rows) => {
                    set_puppies.set(rows);
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Fetch inventory on mount
    create_effect(move |_| load());

    let change_status = move |session: AdminSession, id: String, value: String| {
        let Some(status) = PuppyStatus::parse(&value) else {
            return;
        };

        set_row_error.set(None);
        set_updating.set(Some(id.clone()));

        spawn_local(async move {
            match api::update_puppy_status(&session, &id, status).await {
                Ok(updated) => {
                    set_puppies.update(|rows| apply_update(rows, &updated));
                    site.show_success(&format!("{} is now {}", updated.name, status.label()));
                }
                Err(e) => {
                    set_row_error.set(Some((id, e)));
                    // Nudge the rows so each select re-asserts its unchanged status
                    set_puppies.update(|_| {});
                }
            }
            set_updating.set(None);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Puppies"</h2>
                <button
                    on:click=move |_| load()
                    class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                if let Some(message) = error.get() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-red-400">{message}</p>
                            <button
                                on:click=move |_| load()
                                class="mt-4 px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                            >
                                "Try again"
                            </button>
                        </div>
                    }.into_view();
                }

                let rows = puppies.get();
                if rows.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-center py-12">"No puppies yet."</p>
                    }.into_view();
                }

                let session = session.clone();
                view! {
                    <table class="w-full text-left">
                        <thead>
                            <tr class="text-gray-400 text-sm border-b border-gray-700">
                                <th class="py-2 pr-4">"Name"</th>
                                <th class="py-2 pr-4">"Breed"</th>
                                <th class="py-2">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|puppy| {
                                let id = puppy.id.clone();
                                let id_for_change = puppy.id.clone();
                                let id_for_busy = puppy.id.clone();
                                let id_for_error = puppy.id.clone();
                                let status = puppy.status;
                                let session = session.clone();

                                view! {
                                    <tr class="border-b border-gray-700 last:border-0">
                                        <td class="py-3 pr-4 font-medium">{puppy.name.clone()}</td>
                                        <td class="py-3 pr-4 text-gray-300">{puppy.breed.clone()}</td>
                                        <td class="py-3">
                                            <select
                                                prop:value=status.as_str()
                                                disabled=move || updating.get().as_deref() == Some(id_for_busy.as_str())
                                                on:change=move |ev| change_status(
                                                    session.clone(),
                                                    id_for_change.clone(),
                                                    event_target_value(&ev),
                                                )
                                                class="bg-gray-700 rounded-lg px-3 py-2
                                                       border border-gray-600 focus:border-primary-500 focus:outline-none"
                                            >
                                                {PuppyStatus::ALL.into_iter().map(|option| view! {
                                                    <option
                                                        value=option.as_str()
                                                        selected=option == status
                                                    >
                                                        {option.label()}
                                                    </option>
                                                }).collect_view()}
                                            </select>

                                            {move || {
                                                if updating.get().as_deref() == Some(id.as_str()) {
                                                    view! {
                                                        <span class="text-gray-400 text-xs ml-2">"Updating..."</span>
                                                    }.into_view()
                                                } else {
                                                    view! {}.into_view()
                                                }
                                            }}

                                            // Mutation error, inline next to the control
                                            {move || {
                                                row_error.get()
                                                    .filter(|(eid, _)| eid == &id_for_error)
                                                    .map(|(_, message)| view! {
                                                        <p class="text-red-400 text-xs mt-1">{message}</p>
                                                    })
                                            }}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Vec<Puppy> {
        vec![
            Puppy {
                id: "p1".to_string(),
                name: "Biscuit".to_string(),
                breed: "Golden Retriever".to_string(),
                status: PuppyStatus::Available,
            },
            Puppy {
                id: "p2".to_string(),
                name: "Mochi".to_string(),
                breed: "Cavapoo".to_string(),
                status: PuppyStatus::Available,
            },
        ]
    }

    #[test]
    fn update_touches_only_the_matching_row() {
        let mut rows = inventory();
        let updated = Puppy {
            status: PuppyStatus::Reserved,
            ..rows[1].clone()
        };

        apply_update(&mut rows, &updated);

        assert_eq!(rows[0].status, PuppyStatus::Available);
        assert_eq!(rows[1].status, PuppyStatus::Reserved);
    }

    #[test]
    fn update_for_unknown_id_changes_nothing() {
        let mut rows = inventory();
        let stranger = Puppy {
            id: "p999".to_string(),
            name: "Ghost".to_string(),
            breed: "Unknown".to_string(),
            status: PuppyStatus::Adopted,
        };

        apply_update(&mut rows, &stranger);

        assert!(rows.iter().all(|p| p.status == PuppyStatus::Available));
    }
}
