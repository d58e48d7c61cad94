//! FAQ Page

use leptos::*;
use leptos_router::*;

use crate::catalog::FAQ_ENTRIES;

/// Frequently asked questions page
#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            <div>
                <h1 class="text-3xl font-bold">"Frequently Asked Questions"</h1>
                <p class="text-gray-400 mt-1">"Everything families usually ask before applying"</p>
            </div>

            <div class="space-y-4">
                {FAQ_ENTRIES.iter().map(|entry| view! {
                    <details class="bg-gray-800 rounded-xl border border-gray-700 p-6 group">
                        <summary class="font-semibold cursor-pointer list-none flex items-center justify-between">
                            {entry.question}
                            <span class="text-gray-500 group-open:rotate-180 transition-transform">"⌄"</span>
                        </summary>
                        <p class="text-gray-400 text-sm mt-4">{entry.answer}</p>
                    </details>
                }).collect_view()}
            </div>

            <div class="bg-gray-800 rounded-xl p-6 text-center">
                <p class="text-gray-300 mb-3">"Still have a question?"</p>
                <A
                    href="/contact"
                    class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Contact us"
                </A>
            </div>
        </div>
    }
}
