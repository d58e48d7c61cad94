//! Puppies Page
//!
//! Public listing of puppies currently available for adoption.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::types::{Puppy, PuppyStatus};
use crate::components::Loading;

/// Available puppies page
#[component]
pub fn Puppies() -> impl IntoView {
    let (puppies, set_puppies) = create_signal(Vec::<Puppy>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    // Fetch inventory on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_puppies().await {
                Ok(rows) => {
                    set_puppies.set(rows);
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Available Puppies"</h1>
                <p class="text-gray-400 mt-1">"Everyone here is looking for a home"</p>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                if let Some(message) = error.get() {
                    return view! {
                        <p class="text-red-400 text-center py-12">{message}</p>
                    }.into_view();
                }

                let available: Vec<Puppy> = puppies.get()
                    .into_iter()
                    .filter(|p| p.status == PuppyStatus::Available)
                    .collect();

                if available.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400 mb-4">
                                "No puppies are available right now - new litters are announced first to our waitlist."
                            </p>
                            <A href="/contact" class="text-primary-400 hover:text-primary-300 font-medium">
                                "Join the waitlist"
                            </A>
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {available.into_iter().map(|puppy| view! {
                            <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition-colors">
                                <div class="flex items-center justify-between">
                                    <h3 class="font-semibold text-lg">{puppy.name.clone()}</h3>
                                    <span class=format!(
                                        "{} text-xs px-2 py-0.5 rounded-full text-white",
                                        puppy.status.badge_class()
                                    )>
                                        {puppy.status.label()}
                                    </span>
                                </div>
                                <p class="text-gray-400 text-sm mt-1">{puppy.breed.clone()}</p>
                                <A
                                    href="/contact"
                                    class="inline-block mt-4 text-primary-400 hover:text-primary-300 text-sm font-medium"
                                >
                                    "Ask about " {puppy.name.clone()}
                                </A>
                            </div>
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}
