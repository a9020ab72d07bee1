use landing_domain::course::CoursePrice;
use landing_domain::currency::Currency;
use landing_domain::format::format_price;

/// Timezone fragments that suggest the visitor pays in dinars.
const DZD_TIMEZONE_HINTS: [&str; 2] = ["Algeria", "Africa"];

/// Which side of the toggle carries the active marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleLabel {
    /// The leading `DZD` label.
    Dzd,
    /// The trailing `USD` label.
    Usd,
}

/// Everything the pricing section shows for a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyDisplay {
    pub currency: Currency,
    pub toggle_checked: bool,
    pub active_label: ToggleLabel,
    /// 0-based index of the highlighted price card.
    pub highlighted_card: usize,
}

impl CurrencyDisplay {
    #[must_use]
    pub const fn for_currency(currency: Currency) -> Self {
        match currency {
            Currency::Dzd => Self {
                currency,
                toggle_checked: false,
                active_label: ToggleLabel::Dzd,
                highlighted_card: 0,
            },
            Currency::Usd => Self {
                currency,
                toggle_checked: true,
                active_label: ToggleLabel::Usd,
                highlighted_card: 1,
            },
        }
    }

    /// The exact amount of `price` in the displayed currency, e.g. `"18,000.00 DZD"`.
    #[must_use]
    pub fn amount_label(&self, price: CoursePrice) -> String {
        format_price(u64::from(price.amount(self.currency)), self.currency)
    }
}

/// Picks a default currency from an IANA timezone name such as `Africa/Algiers`.
#[must_use]
pub fn detect_currency(timezone: &str) -> Option<Currency> {
    DZD_TIMEZONE_HINTS
        .iter()
        .any(|hint| timezone.contains(hint))
        .then_some(Currency::Dzd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn african_timezones_default_to_dinars() {
        assert_eq!(detect_currency("Africa/Algiers"), Some(Currency::Dzd));
        assert_eq!(detect_currency("Africa/Lagos"), Some(Currency::Dzd));
        assert_eq!(detect_currency("Europe/Paris"), None);
        assert_eq!(detect_currency(""), None);
    }

    #[test]
    fn display_highlights_matching_card() {
        let dzd = CurrencyDisplay::for_currency(Currency::Dzd);
        assert_eq!((dzd.highlighted_card, dzd.active_label, dzd.toggle_checked), (0, ToggleLabel::Dzd, false));

        let usd = CurrencyDisplay::for_currency(Currency::Usd);
        assert_eq!((usd.highlighted_card, usd.active_label, usd.toggle_checked), (1, ToggleLabel::Usd, true));
    }

    #[test]
    fn amount_follows_displayed_currency() {
        let price = CoursePrice { usd: 119, dzd: 18_000 };
        assert_eq!(CurrencyDisplay::for_currency(Currency::Dzd).amount_label(price), "18,000.00 DZD");
        assert_eq!(CurrencyDisplay::for_currency(Currency::Usd).amount_label(price), "$119.00");
    }
}
