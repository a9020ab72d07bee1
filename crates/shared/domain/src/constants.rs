//! Well-known keys and identifiers shared by the page components.

/// Local-store key holding the serialized [`crate::currency::UserPreferences`].
pub const PREFERENCES_KEY: &str = "userPreferences";
/// Local-store key holding the list of [`crate::notification::NotificationRequest`].
pub const NOTIFICATIONS_KEY: &str = "courseNotifications";
/// Session-store key holding the raw referral code.
pub const REFERRAL_KEY: &str = "referral";

pub const REGISTRATION_COURSE: &str = "Time Series Fundamentals - Part 1";
pub const REGISTRATION_SOURCE: &str = "website_registration";

pub const REF_PARAM: &str = "ref";
pub const COURSE_PARAM: &str = "course";

pub const PAGE_VIEW: &str = "page_view";
pub const PAGE_NAME: &str = "course_landing";
pub const PAGE_COURSE: &str = "part_1";
