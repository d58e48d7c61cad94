//! Contact Page
//!
//! Contact details plus the Crisp chat entry point.

use leptos::*;

use crate::analytics::{crisp, gtm};

/// Contact page component
#[component]
pub fn Contact() -> impl IntoView {
    let open_chat = move |_| {
        gtm::push_event("contact_chat_opened");
        crisp::open_chat();
    };

    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            <div>
                <h1 class="text-3xl font-bold">"Contact Us"</h1>
                <p class="text-gray-400 mt-1">"We answer within one business day"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-4">
                <ContactCard icon="✉️" title="Email" detail="hello@pawhaven.com" />
                <ContactCard icon="📞" title="Phone" detail="(555) 014-7292" />
                <ContactCard icon="🕐" title="Hours" detail="Mon-Sat, 9am-6pm CT" />
                <ContactCard icon="📍" title="Visits" detail="By appointment only" />
            </div>

            // Live chat
            <div class="bg-gray-800 rounded-xl p-6 text-center">
                <div class="text-4xl mb-3">"💬"</div>
                <h2 class="text-xl font-semibold mb-2">"Chat with us"</h2>
                <p class="text-gray-400 text-sm mb-4">
                    "Fastest way to reach us during business hours."
                </p>
                <button
                    on:click=open_chat
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Start a chat"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ContactCard(
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 flex items-center space-x-4">
            <span class="text-3xl">{icon}</span>
            <div>
                <h3 class="font-semibold">{title}</h3>
                <p class="text-gray-400 text-sm">{detail}</p>
            </div>
        </div>
    }
}
