//! Breed Catalog
//!
//! The breeds we place puppies for, with the traits families ask about.

/// A breed in the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breed {
    pub slug: &'static str,
    pub name: &'static str,
    pub size: &'static str,
    pub energy: &'static str,
    pub temperament: &'static str,
    pub description: &'static str,
}

pub const BREEDS: &[Breed] = &[
    Breed {
        slug: "golden-retriever",
        name: "Golden Retriever",
        size: "Large (55-75 lbs)",
        energy: "High",
        temperament: "Friendly, patient, eager to please",
        description: "The classic family dog. Goldens are gentle with kids, \
                      quick to train, and happiest when they're part of \
                      everything the household does.",
    },
    Breed {
        slug: "labrador-retriever",
        name: "Labrador Retriever",
        size: "Large (55-80 lbs)",
        energy: "High",
        temperament: "Outgoing, even-tempered, athletic",
        description: "Labs are adaptable and famously good-natured. They do \
                      best with daily exercise and a family that likes the \
                      outdoors.",
    },
    Breed {
        slug: "cavalier-king-charles",
        name: "Cavalier King Charles Spaniel",
        size: "Small (13-18 lbs)",
        energy: "Moderate",
        temperament: "Affectionate, gentle, adaptable",
        description: "A true lap companion that still enjoys a walk. \
                      Cavaliers settle well in apartments and with quieter \
                      households.",
    },
    Breed {
        slug: "french-bulldog",
        name: "French Bulldog",
        size: "Small (16-28 lbs)",
        energy: "Low",
        temperament: "Playful, alert, easygoing",
        description: "Frenchies are compact charmers with modest exercise \
                      needs. They prefer climate-controlled comfort and \
                      plenty of company.",
    },
    Breed {
        slug: "goldendoodle",
        name: "Goldendoodle",
        size: "Medium (30-45 lbs)",
        energy: "Moderate",
        temperament: "Social, clever, low-shedding",
        description: "A Golden Retriever and Poodle cross that combines an \
                      easy temperament with a coat many allergy-sensitive \
                      families do well with.",
    },
    Breed {
        slug: "bernedoodle",
        name: "Bernedoodle",
        size: "Medium-Large (40-70 lbs)",
        energy: "Moderate",
        temperament: "Loyal, goofy, gentle",
        description: "Bernese Mountain Dog softness with Poodle smarts. \
                      Bernedoodles bond hard with their people and love a \
                      yard to patrol.",
    },
    Breed {
        slug: "cavapoo",
        name: "Cavapoo",
        size: "Small (10-20 lbs)",
        energy: "Moderate",
        temperament: "Sweet, curious, people-oriented",
        description: "A Cavalier and Miniature Poodle cross sized for small \
                      homes. Cavapoos are easy to travel with and quick to \
                      make friends.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_populated() {
        assert!(!BREEDS.is_empty());
        for breed in BREEDS {
            assert!(!breed.name.is_empty());
            assert!(!breed.description.is_empty());
        }
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = BREEDS.iter().map(|b| b.slug).collect();
        assert_eq!(slugs.len(), BREEDS.len());
    }
}
