//! Catalog Data
//!
//! Static marketing catalog: breeds we place, coat colors, and the FAQ.

pub mod breeds;
pub mod colors;
pub mod faq;

pub use breeds::{Breed, BREEDS};
pub use colors::{CoatColor, COAT_COLORS};
pub use faq::{FaqEntry, FAQ_ENTRIES};
