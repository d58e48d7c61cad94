//! Coat Color Catalog

/// A coat color families can ask about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoatColor {
    pub name: &'static str,
    /// CSS color for the swatch
    pub swatch: &'static str,
    pub description: &'static str,
}

pub const COAT_COLORS: &[CoatColor] = &[
    CoatColor {
        name: "Cream",
        swatch: "#F5E9D3",
        description: "Pale gold through off-white. Common in Goldens, \
                      Goldendoodles, and Cavapoos.",
    },
    CoatColor {
        name: "Apricot",
        swatch: "#E8A85C",
        description: "Warm orange-gold, usually from the Poodle side of a \
                      doodle cross.",
    },
    CoatColor {
        name: "Red",
        swatch: "#A64B2A",
        description: "Deep rusty red, most often seen in Cavapoos and \
                      darker Goldendoodles.",
    },
    CoatColor {
        name: "Black",
        swatch: "#1C1C1C",
        description: "Solid black, classic in Labs and Bernedoodles.",
    },
    CoatColor {
        name: "Chocolate",
        swatch: "#5C3A21",
        description: "Rich brown, a Labrador staple.",
    },
    CoatColor {
        name: "Blenheim",
        swatch: "#C97B4A",
        description: "Chestnut patches on pearl white, the signature \
                      Cavalier King Charles pattern.",
    },
    CoatColor {
        name: "Tri-Color",
        swatch: "#3E2A20",
        description: "Black, white, and tan together. The Bernedoodle \
                      favorite.",
    },
    CoatColor {
        name: "Parti",
        swatch: "#D9C7A7",
        description: "Two colors in large patches, at least half white. \
                      Shows up across the doodle crosses.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatches_are_css_hex_colors() {
        for color in COAT_COLORS {
            assert!(color.swatch.starts_with('#'), "{}", color.name);
            assert_eq!(color.swatch.len(), 7, "{}", color.name);
        }
    }
}
