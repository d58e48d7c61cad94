//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod puppies;
pub mod breeds;
pub mod colors;
pub mod faq;
pub mod contact;
pub mod privacy;
pub mod terms;
pub mod admin;

pub use home::Home;
pub use puppies::Puppies;
pub use breeds::Breeds;
pub use colors::Colors;
pub use faq::Faq;
pub use contact::Contact;
pub use privacy::Privacy;
pub use terms::Terms;
pub use admin::Admin;
