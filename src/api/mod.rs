//! Pawhaven API Client
//!
//! Thin HTTP client for the Pawhaven REST API.
//!
//! # Endpoints
//!
//! - `GET /api/puppies` - puppy inventory
//! - `PATCH /api/puppies/:id` - change a puppy's status (admin only)
//! - `GET /api/applications` - adoption applications
//! - `GET /api/analytics/ga4/status` - whether GA4 reporting is configured
//! - `GET /api/analytics/ga4/comprehensive` - full analytics snapshot

pub mod client;
pub mod types;

pub use client::*;
pub use types::*;
