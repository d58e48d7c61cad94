//! API Data Transfer Objects
//!
//! Record shapes consumed from the Pawhaven REST API. These are externally
//! defined: the backend owns validation, uniqueness, and lifecycle, and the
//! client renders them as-is.

use serde::{Deserialize, Serialize};

// ============ Puppies ============

/// Adoption status of a puppy. Mutated only via the admin PATCH call;
/// lifecycle is owned entirely by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PuppyStatus {
    Available,
    Reserved,
    Adopted,
}

impl PuppyStatus {
    /// All statuses, in the order the admin dropdown lists them
    pub const ALL: [PuppyStatus; 3] = [
        PuppyStatus::Available,
        PuppyStatus::Reserved,
        PuppyStatus::Adopted,
    ];

    /// Wire value, as sent in the PATCH body
    pub fn as_str(&self) -> &'static str {
        match self {
            PuppyStatus::Available => "available",
            PuppyStatus::Reserved => "reserved",
            PuppyStatus::Adopted => "adopted",
        }
    }

    /// Parse a wire value back into a status
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(PuppyStatus::Available),
            "reserved" => Some(PuppyStatus::Reserved),
            "adopted" => Some(PuppyStatus::Adopted),
            _ => None,
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            PuppyStatus::Available => "Available",
            PuppyStatus::Reserved => "Reserved",
            PuppyStatus::Adopted => "Adopted",
        }
    }

    /// Badge color classes for status chips
    pub fn badge_class(&self) -> &'static str {
        match self {
            PuppyStatus::Available => "bg-green-600",
            PuppyStatus::Reserved => "bg-yellow-600",
            PuppyStatus::Adopted => "bg-gray-600",
        }
    }
}

/// A puppy in the inventory
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Puppy {
    pub id: String,
    pub name: String,
    pub breed: String,
    pub status: PuppyStatus,
}

// ============ Applications ============

/// Review status of an adoption application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "bg-yellow-600",
            ApplicationStatus::Approved => "bg-green-600",
            ApplicationStatus::Rejected => "bg-red-600",
        }
    }
}

/// An adoption application. Read-only from this client's perspective;
/// the applications panel polls the list periodically.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub display_id: String,
    pub name: String,
    pub email: String,
    pub status: ApplicationStatus,
    pub submitted_at: String,
}

impl Application {
    /// Submission timestamp formatted for the table, falling back to the
    /// raw value when the API sends something that is not RFC 3339
    pub fn submitted_label(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.submitted_at)
            .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
            .unwrap_or_else(|_| self.submitted_at.clone())
    }
}

// ============ Analytics ============

/// Whether GA4 reporting is configured on the backend
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AnalyticsStatus {
    pub configured: bool,
}

/// Date range preset for the analytics dashboard, expressed the way the
/// GA4 Data API expects it (`NdaysAgo` / `today`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub days: u32,
}

impl DateRange {
    pub const DEFAULT: DateRange = DateRange { days: 30 };

    /// Presets offered by the dashboard selector
    pub const PRESETS: [DateRange; 3] = [
        DateRange { days: 7 },
        DateRange { days: 30 },
        DateRange { days: 90 },
    ];

    /// `startDate` query value
    pub fn start_param(&self) -> String {
        format!("{}daysAgo", self.days)
    }

    pub fn label(&self) -> String {
        format!("Last {} days", self.days)
    }
}

/// The comprehensive GA4 snapshot, retrieved wholesale per date range.
/// Read-only; no local mutation, no caching beyond the current render.
/// Sections the backend omits deserialize to their defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyticsSnapshot {
    pub realtime_users: u64,
    pub totals: TrafficTotals,
    pub daily: Vec<DailyTraffic>,
    pub top_pages: Vec<PageStat>,
    pub sources: Vec<SourceStat>,
    pub demographics: Demographics,
    pub devices: Vec<DeviceStat>,
    pub countries: Vec<CountryStat>,
    pub events: Vec<EventStat>,
    pub landing_pages: Vec<PageStat>,
    pub exit_pages: Vec<PageStat>,
    pub conversions: Vec<ConversionStat>,
}

/// Traffic totals for the selected range
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrafficTotals {
    pub sessions: u64,
    pub users: u64,
    pub new_users: u64,
    pub pageviews: u64,
    /// Average session duration in seconds
    pub avg_session_duration: f64,
    /// Bounce rate as a 0..1 fraction
    pub bounce_rate: f64,
}

/// One day of the traffic trend series
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DailyTraffic {
    /// GA4 date dimension, `YYYYMMDD`
    pub date: String,
    pub sessions: u64,
    pub users: u64,
}

impl DailyTraffic {
    /// Short `MM/DD` axis label; unrecognized date values pass through
    pub fn short_label(&self) -> String {
        match (self.date.get(4..6), self.date.get(6..8)) {
            (Some(month), Some(day)) if self.date.len() == 8 => {
                format!("{}/{}", month, day)
            }
            _ => self.date.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageStat {
    pub path: String,
    pub views: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceStat {
    pub source: String,
    pub sessions: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeviceStat {
    pub device: String,
    pub sessions: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CountryStat {
    pub country: String,
    pub sessions: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventStat {
    pub name: String,
    pub count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConversionStat {
    pub name: String,
    pub count: u64,
}

/// Audience breakdowns
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Demographics {
    pub age_groups: Vec<BucketStat>,
    pub genders: Vec<BucketStat>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BucketStat {
    pub bucket: String,
    pub users: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puppy_status_wire_values_round_trip() {
        for status in PuppyStatus::ALL {
            assert_eq!(PuppyStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(PuppyStatus::parse("sold"), None);
    }

    #[test]
    fn parses_puppy_list() {
        let body = r#"[
            {"id": "p1", "name": "Biscuit", "breed": "Golden Retriever", "status": "available"},
            {"id": "p2", "name": "Mochi", "breed": "Cavapoo", "status": "reserved"}
        ]"#;

        let puppies: Vec<Puppy> = serde_json::from_str(body).unwrap();
        assert_eq!(puppies.len(), 2);
        assert_eq!(puppies[0].status, PuppyStatus::Available);
        assert_eq!(puppies[1].name, "Mochi");
    }

    #[test]
    fn parses_application_with_camel_case_fields() {
        let body = r#"{
            "id": "a9",
            "displayId": "APP-0009",
            "name": "Jordan Reyes",
            "email": "jordan@example.com",
            "status": "pending",
            "submittedAt": "2025-07-14T09:30:00Z"
        }"#;

        let app: Application = serde_json::from_str(body).unwrap();
        assert_eq!(app.display_id, "APP-0009");
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.submitted_label(), "Jul 14, 2025 09:30");
    }

    #[test]
    fn application_with_opaque_timestamp_falls_back_to_raw() {
        let app = Application {
            id: "a1".to_string(),
            display_id: "APP-0001".to_string(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            status: ApplicationStatus::Approved,
            submitted_at: "last Tuesday".to_string(),
        };
        assert_eq!(app.submitted_label(), "last Tuesday");
    }

    #[test]
    fn date_range_params() {
        assert_eq!(DateRange { days: 90 }.start_param(), "90daysAgo");
        assert_eq!(DateRange::DEFAULT.start_param(), "30daysAgo");
        assert_eq!(DateRange { days: 7 }.label(), "Last 7 days");
    }

    #[test]
    fn parses_full_snapshot() {
        let body = r#"{
            "realtimeUsers": 12,
            "totals": {
                "sessions": 4821,
                "users": 3900,
                "newUsers": 2410,
                "pageviews": 15203,
                "avgSessionDuration": 204.5,
                "bounceRate": 0.42
            },
            "daily": [
                {"date": "20250801", "sessions": 160, "users": 130},
                {"date": "20250802", "sessions": 171, "users": 140}
            ],
            "topPages": [{"path": "/puppies", "views": 5200}],
            "sources": [{"source": "google", "sessions": 2100}],
            "demographics": {
                "ageGroups": [{"bucket": "25-34", "users": 1200}],
                "genders": [{"bucket": "female", "users": 2100}]
            },
            "devices": [{"device": "mobile", "sessions": 3100}],
            "countries": [{"country": "United States", "sessions": 4300}],
            "events": [{"name": "page_view", "count": 15203}],
            "landingPages": [{"path": "/", "views": 2600}],
            "exitPages": [{"path": "/contact", "views": 900}],
            "conversions": [{"name": "application_submitted", "count": 37}]
        }"#;

        let snapshot: AnalyticsSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.realtime_users, 12);
        assert_eq!(snapshot.totals.new_users, 2410);
        assert_eq!(snapshot.daily[0].short_label(), "08/01");
        assert_eq!(snapshot.demographics.age_groups[0].bucket, "25-34");
        assert_eq!(snapshot.conversions[0].count, 37);
    }

    #[test]
    fn snapshot_tolerates_missing_sections() {
        let body = r#"{"realtimeUsers": 3, "totals": {"sessions": 10}}"#;

        let snapshot: AnalyticsSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.realtime_users, 3);
        assert_eq!(snapshot.totals.sessions, 10);
        assert_eq!(snapshot.totals.bounce_rate, 0.0);
        assert!(snapshot.daily.is_empty());
        assert!(snapshot.conversions.is_empty());
    }

    #[test]
    fn daily_label_passes_through_unexpected_dates() {
        let day = DailyTraffic {
            date: "2025-08-01".to_string(),
            sessions: 1,
            users: 1,
        };
        assert_eq!(day.short_label(), "2025-08-01");
    }
}
