//! Breeds Page

use leptos::*;

use crate::catalog::BREEDS;

/// Breed catalog page
#[component]
pub fn Breeds() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Our Breeds"</h1>
                <p class="text-gray-400 mt-1">"The breeds and crosses we place, and what to expect from each"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                {BREEDS.iter().map(|breed| view! {
                    <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                        <h2 class="text-xl font-semibold">{breed.name}</h2>

                        <div class="flex flex-wrap gap-2 mt-3 text-xs">
                            <span class="bg-gray-700 px-2 py-1 rounded-full text-gray-300">{breed.size}</span>
                            <span class="bg-gray-700 px-2 py-1 rounded-full text-gray-300">
                                {format!("{} energy", breed.energy)}
                            </span>
                        </div>

                        <p class="text-gray-400 text-sm mt-4">{breed.description}</p>
                        <p class="text-gray-500 text-sm mt-3 italic">{breed.temperament}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
