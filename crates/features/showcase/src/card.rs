use landing_domain::course::{CourseKey, course_by_number};

/// What was under the pointer when a course card was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A link inside the card; the link handles the click itself.
    Link,
    /// Any other part of the card.
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    ScrollToRegistration,
    OpenComingSoon(CourseKey),
    Ignore,
}

/// Decides what a click on card `number` (1-based) does.
#[must_use]
pub fn card_action(number: usize, target: ClickTarget) -> CardAction {
    if target == ClickTarget::Link {
        return CardAction::Ignore;
    }
    match course_by_number(number) {
        Some(course) if course.is_available() => CardAction::ScrollToRegistration,
        Some(course) => CardAction::OpenComingSoon(course.key),
        None => CardAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks() {
        assert_eq!(card_action(1, ClickTarget::Card), CardAction::ScrollToRegistration);
        assert_eq!(card_action(2, ClickTarget::Card), CardAction::OpenComingSoon(CourseKey::Part2));
        assert_eq!(card_action(3, ClickTarget::Link), CardAction::Ignore);
        assert_eq!(card_action(9, ClickTarget::Card), CardAction::Ignore);
    }
}
