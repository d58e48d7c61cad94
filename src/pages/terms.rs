//! Terms of Service Page

use leptos::*;

/// Terms of service page
#[component]
pub fn Terms() -> impl IntoView {
    view! {
        <div class="space-y-8 max-w-3xl mx-auto">
            <div>
                <h1 class="text-3xl font-bold">"Terms of Service"</h1>
                <p class="text-gray-400 mt-1">"Last updated August 2026"</p>
            </div>

            <TermsSection title="Applications and reservations">
                "Submitting an application does not reserve a puppy. A puppy \
                 is reserved only once we confirm your application and receive \
                 a deposit. Deposits are applied to the adoption fee and are \
                 refundable until two weeks before the scheduled go-home date."
            </TermsSection>

            <TermsSection title="Listings">
                "Puppy availability shown on this site is updated by our staff \
                 and can lag behind reality by a short time. If two families \
                 apply for the same puppy, applications are handled in the \
                 order received."
            </TermsSection>

            <TermsSection title="Health guarantee">
                "Every placement includes our two-year genetic health \
                 guarantee. The written agreement you sign at reservation is \
                 the authoritative version of its terms and prevails over any \
                 summary on this site."
            </TermsSection>

            <TermsSection title="Site content">
                "Photos and text on this site belong to Pawhaven. You're \
                 welcome to share links; please don't reuse our photos to \
                 advertise animals we are not placing."
            </TermsSection>

            <TermsSection title="Changes">
                "We may update these terms as the business changes. The date \
                 above reflects the latest revision; continued use of the site \
                 after a change means you accept the revised terms."
            </TermsSection>
        </div>
    }
}

#[component]
fn TermsSection(
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
