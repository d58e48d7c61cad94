//! UI Components
//!
//! Reusable Leptos components for the site and admin console.

pub mod nav;
pub mod loading;
pub mod toast;
pub mod puppies_panel;
pub mod applications_panel;
pub mod analytics_dashboard;
pub mod trend_chart;

pub use nav::Nav;
pub use loading::Loading;
pub use toast::Toast;
pub use puppies_panel::PuppiesPanel;
pub use applications_panel::ApplicationsPanel;
pub use analytics_dashboard::AnalyticsDashboard;
pub use trend_chart::TrendChart;
