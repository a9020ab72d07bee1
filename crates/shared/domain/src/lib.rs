//! # Domain Models
//!
//! Pure landing-page types with minimal dependencies (`serde`, `chrono`).
//! Keep it lean: no I/O or heavy logic, just data and simple helpers.

pub mod analytics;
pub mod config;
pub mod constants;
pub mod course;
pub mod currency;
pub mod format;
pub mod notification;
pub mod registration;
