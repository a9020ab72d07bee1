//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it holds config loading, the clock seam and the
//! input predicates both the registration form and the page controller rely on.
//!
//! ## Validation
//! ```rust
//! use landing_kernel::validation::{is_full_name, is_valid_email};
//!
//! assert!(is_valid_email("jane@example.com"));
//! assert!(!is_valid_email("jane@example"));
//! assert!(is_full_name("Jane Doe"));
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use landing_kernel::config::load_config;
//! use landing_kernel::domain::config::SiteConfig;
//!
//! let cfg: SiteConfig = load_config(Some("config/landing")).unwrap_or_default();
//! ```
pub mod clock;
pub mod config;
pub mod validation;

pub use landing_domain as domain;
