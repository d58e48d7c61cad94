//! State Management
//!
//! Session credentials, refresh plumbing, and site-wide toast signals.

pub mod refresh;
pub mod session;
pub mod site;

pub use refresh::{FetchSequence, Poller};
pub use session::{AdminSession, SessionState};
pub use site::{provide_site_state, SiteState};
