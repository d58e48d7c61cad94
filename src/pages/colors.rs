//! Colors Page

use leptos::*;

use crate::catalog::COAT_COLORS;

/// Coat color catalog page
#[component]
pub fn Colors() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Coat Colors"</h1>
                <p class="text-gray-400 mt-1">"Colors and patterns you'll see across our litters"</p>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4">
                {COAT_COLORS.iter().map(|color| view! {
                    <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                        <div
                            class="w-full h-16 rounded-lg border border-gray-600"
                            style=format!("background-color: {}", color.swatch)
                        />
                        <h3 class="font-semibold mt-3">{color.name}</h3>
                        <p class="text-gray-400 text-sm mt-1">{color.description}</p>
                    </div>
                }).collect_view()}
            </div>

            <p class="text-gray-500 text-sm">
                "Color availability varies by litter. Ask about upcoming litters if you have your heart set on one."
            </p>
        </div>
    }
}
