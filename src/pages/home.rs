//! Home Page
//!
//! Marketing landing page.

use leptos::*;
use leptos_router::*;

use crate::catalog::BREEDS;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-16">
            // Hero
            <section class="text-center py-12">
                <div class="text-6xl mb-6">"🐶"</div>
                <h1 class="text-4xl md:text-5xl font-bold mb-4">
                    "Raised with love, ready for yours"
                </h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto mb-8">
                    "Pawhaven places health-tested, family-raised puppies with "
                    "homes across the country. Meet the litters, pick your "
                    "match, and we'll handle the rest."
                </p>
                <div class="flex justify-center space-x-4">
                    <A
                        href="/puppies"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "See available puppies"
                    </A>
                    <A
                        href="/contact"
                        class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                    >
                        "Talk to us"
                    </A>
                </div>
            </section>

            // How it works
            <section>
                <h2 class="text-2xl font-semibold text-center mb-8">"How adoption works"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    <StepCard
                        icon="📋"
                        title="Apply"
                        text="Tell us about your home and which puppy caught your eye."
                    />
                    <StepCard
                        icon="📞"
                        title="Meet"
                        text="We schedule a call, answer questions, and reserve your puppy with a deposit."
                    />
                    <StepCard
                        icon="🏡"
                        title="Bring home"
                        text="Pick up at 8 weeks, or let us arrange delivery to your door."
                    />
                </div>
            </section>

            // Featured breeds
            <section>
                <div class="flex items-center justify-between mb-8">
                    <h2 class="text-2xl font-semibold">"Breeds we place"</h2>
                    <A href="/breeds" class="text-primary-400 hover:text-primary-300 text-sm font-medium">
                        "All breeds →"
                    </A>
                </div>
                <div class="grid md:grid-cols-3 gap-6">
                    {BREEDS.iter().take(3).map(|breed| view! {
                        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                            <h3 class="font-semibold text-lg">{breed.name}</h3>
                            <p class="text-gray-500 text-sm mt-1">{breed.size}</p>
                            <p class="text-gray-400 text-sm mt-3">{breed.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn StepCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-center">
            <div class="text-4xl mb-3">{icon}</div>
            <h3 class="font-semibold text-lg mb-2">{title}</h3>
            <p class="text-gray-400 text-sm">{text}</p>
        </div>
    }
}
