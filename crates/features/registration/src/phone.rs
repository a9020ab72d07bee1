use regex::Regex;
use std::sync::LazyLock;

const ALGERIA_PREFIX: &str = "213";

static ALGERIAN_GROUPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{3})(\d{1})(\d{2})(\d{2})(\d{2})(\d{2})").expect("valid phone regex")
});

/// Normalizes a phone number as the visitor types.
///
/// Non-digits are dropped. Algerian numbers (`213..`) with at least twelve digits are
/// grouped as `+213 550 12 34 56`, keeping any extra trailing digits. Other numbers of
/// ten or more digits get a leading `+`. Applying it twice changes nothing.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.starts_with(ALGERIA_PREFIX) {
        return ALGERIAN_GROUPS.replace(&digits, "+$1 $2$3 $4 $5 $6").into_owned();
    }
    if digits.len() >= 10 {
        return format!("+{digits}");
    }
    digits
}
