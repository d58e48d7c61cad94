//! Privacy Policy Page

use leptos::*;

/// Privacy policy page
#[component]
pub fn Privacy() -> impl IntoView {
    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            <div>
                <h1 class="text-3xl font-bold">"Privacy Policy"</h1>
                <p class="text-gray-400 mt-1">"Last updated August 2026"</p>
            </div>

            <PolicySection title="What we collect">
                "When you apply to adopt, we collect your name, email address, \
                 phone number, and the details you share about your household. \
                 We use this information only to review your application and to \
                 stay in touch about your puppy."
            </PolicySection>

            <PolicySection title="Analytics and cookies">
                "We use Google Analytics and Google Tag Manager to understand \
                 how visitors use the site. These tools set cookies only after \
                 you give consent through our consent banner, which is provided \
                 by Axeptio. You can change or withdraw your consent at any \
                 time from the cookie icon in the corner of the page."
            </PolicySection>

            <PolicySection title="Live chat">
                "Our chat widget is provided by Crisp. Messages you send \
                 through chat, and the email address you choose to leave, are \
                 processed by Crisp on our behalf so we can answer you."
            </PolicySection>

            <PolicySection title="What we never do">
                "We do not sell your personal information, and we do not share \
                 application details with anyone outside Pawhaven except as \
                 required to complete your adoption (for example, a delivery \
                 partner's name and route)."
            </PolicySection>

            <PolicySection title="Your choices">
                "Email us at hello@pawhaven.com to request a copy of the \
                 information we hold about you or to ask us to delete it. \
                 Deleting application data for a completed adoption may be \
                 limited by our record-keeping obligations."
            </PolicySection>
        </div>
    }
}

#[component]
fn PolicySection(
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-3">{title}</h2>
            <p class="text-gray-400 text-sm leading-relaxed">{children()}</p>
        </section>
    }
}
