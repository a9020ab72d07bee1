//! # Page Interactions
//!
//! Everything on the landing page besides the registration form: course cards and
//! their previews, the coming-soon and comparison modals, the currency toggle, the
//! early-bird countdown, scroll reveal, URL parameters and analytics.
//!
//! A presentation layer implements [`PageView`], builds a [`PageController`] with
//! [`PageController::load`] and forwards UI events to it. The controller owns the
//! page state and every timer it starts; dropping it ends the visit.

pub mod analytics;
pub mod card;
mod controller;
pub mod countdown;
pub mod currency;
mod error;
pub mod modal;
pub mod notify;
pub mod params;
pub mod preferences;
pub mod preview;
pub mod reveal;
mod view;

pub use crate::controller::{PageContext, PageController, PageLoad, PageState};
pub use crate::error::{ShowcaseError, ShowcaseErrorExt};
pub use crate::view::PageView;
