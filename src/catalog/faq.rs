//! Frequently Asked Questions

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How does the adoption process work?",
        answer: "Submit an application for the puppy you're interested in. \
                 We review applications in the order they arrive, schedule a \
                 call to make sure it's a good match, and then arrange a \
                 deposit to reserve your puppy until pickup day.",
    },
    FaqEntry {
        question: "What does 'reserved' mean on a puppy's listing?",
        answer: "A family has placed a deposit on that puppy. If the \
                 adoption falls through the puppy returns to available, so \
                 it can still be worth applying.",
    },
    FaqEntry {
        question: "Are your puppies vaccinated and vet-checked?",
        answer: "Yes. Every puppy goes home with age-appropriate \
                 vaccinations, deworming, a microchip, and a written exam \
                 report from our veterinarian.",
    },
    FaqEntry {
        question: "Do you offer a health guarantee?",
        answer: "We provide a two-year genetic health guarantee on every \
                 placement. The full terms are included in your adoption \
                 agreement.",
    },
    FaqEntry {
        question: "Can you deliver a puppy to us?",
        answer: "We offer ground delivery within 400 miles and can arrange \
                 a flight nanny for longer distances. Delivery costs are \
                 quoted per trip during your application call.",
    },
    FaqEntry {
        question: "When can puppies go to their new homes?",
        answer: "Puppies go home at 8 weeks at the earliest. We'll send \
                 photos and updates while you wait.",
    },
    FaqEntry {
        question: "What should we have ready before pickup?",
        answer: "A crate, a harness sized for the breed, and the food we'll \
                 tell you the litter has been weaned onto. We send a full \
                 go-home checklist with your confirmation.",
    },
    FaqEntry {
        question: "How do I ask a question that isn't covered here?",
        answer: "Use the chat bubble in the corner or the contact page. We \
                 answer within one business day.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_has_question_and_answer() {
        assert!(!FAQ_ENTRIES.is_empty());
        for entry in FAQ_ENTRIES {
            assert!(entry.question.ends_with('?'));
            assert!(!entry.answer.is_empty());
        }
    }
}
