//! Query parameters understood by the landing page.

use crate::error::ShowcaseError;
use landing_domain::constants::{COURSE_PARAM, REF_PARAM};
use url::Url;

/// `?ref=<code>&course=<n>`; empty values count as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrlParams {
    pub referral: Option<String>,
    pub course: Option<String>,
}

impl UrlParams {
    /// Reads the parameters of a full page address.
    ///
    /// # Errors
    /// Returns [`ShowcaseError::Url`] if `address` is not an absolute URL.
    pub fn from_url(address: &str) -> Result<Self, ShowcaseError> {
        let url = Url::parse(address)?;
        Ok(Self::from_query(url.query().unwrap_or_default()))
    }

    /// Reads the parameters of a query string, with or without the leading `?`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                REF_PARAM => &mut params.referral,
                COURSE_PARAM => &mut params.course,
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// The course card number, when the `course` parameter is a positive integer.
    #[must_use]
    pub fn course_number(&self) -> Option<usize> {
        self.course.as_deref()?.trim().parse().ok().filter(|n| *n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_known_parameters() {
        let params = UrlParams::from_url("https://example.com/?ref=spring%2025&course=2&x=1").unwrap();
        assert_eq!(params.referral.as_deref(), Some("spring 25"));
        assert_eq!(params.course_number(), Some(2));
    }

    #[test]
    fn first_value_wins_and_empty_is_absent() {
        let params = UrlParams::from_query("?ref=&ref=abc&course=one");
        assert_eq!(params.referral.as_deref(), Some("abc"));
        assert_eq!(params.course_number(), None);
    }

    #[test]
    fn relative_addresses_are_rejected() {
        assert!(matches!(UrlParams::from_url("/?ref=x"), Err(ShowcaseError::Url { .. })));
    }
}
