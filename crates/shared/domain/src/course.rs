//! The static three-part course catalog and the comparison table built from it.

use crate::currency::Currency;
use crate::format::group_thousands;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKey {
    Part1,
    Part2,
    Part3,
}

impl CourseKey {
    pub const ALL: [Self; 3] = [Self::Part1, Self::Part2, Self::Part3];

    /// 1-based position of the course card on the page.
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Part1 => 1,
            Self::Part2 => 2,
            Self::Part3 => 3,
        }
    }

    #[must_use]
    pub const fn from_number(number: usize) -> Option<Self> {
        match number {
            1 => Some(Self::Part1),
            2 => Some(Self::Part2),
            3 => Some(Self::Part3),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Part1 => "part1",
            Self::Part2 => "part2",
            Self::Part3 => "part3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Available,
    ComingSoon,
}

impl CourseStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

/// Whole-unit prices in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoursePrice {
    pub usd: u32,
    pub dzd: u32,
}

impl CoursePrice {
    #[must_use]
    pub const fn amount(self, currency: Currency) -> u32 {
        match currency {
            Currency::Usd => self.usd,
            Currency::Dzd => self.dzd,
        }
    }

    /// `"$99 USD"`
    #[must_use]
    pub fn international_label(self) -> String {
        format!("${} USD", group_thousands(u64::from(self.usd)))
    }

    /// `"15,000 DZD"`
    #[must_use]
    pub fn algeria_label(self) -> String {
        format!("{} DZD", group_thousands(u64::from(self.dzd)))
    }

    /// Both prices, international first: `"$119 USD / 18,000 DZD"`.
    #[must_use]
    pub fn dual_label(self) -> String {
        format!("{} / {}", self.international_label(), self.algeria_label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseDescriptor {
    pub key: CourseKey,
    pub title: &'static str,
    pub duration: &'static str,
    pub price: CoursePrice,
    pub status: CourseStatus,
    pub dates: &'static str,
    pub features: &'static [&'static str],
    pub level: &'static str,
    pub projects: u8,
}

impl CourseDescriptor {
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, CourseStatus::Available)
    }
}

pub static CATALOG: [CourseDescriptor; 3] = [
    CourseDescriptor {
        key: CourseKey::Part1,
        title: "Time Series Fundamentals",
        duration: "5 days",
        price: CoursePrice { usd: 99, dzd: 15_000 },
        status: CourseStatus::Available,
        dates: "January 20-24, 2025",
        features: &[
            "ARIMA Models & Implementation",
            "Stationarity Testing (ADF, KPSS)",
            "Time Series Decomposition",
            "Forecasting Techniques",
            "Real Business Applications",
            "Certificate of Completion",
        ],
        level: "Beginner",
        projects: 3,
    },
    CourseDescriptor {
        key: CourseKey::Part2,
        title: "Advanced Time Series",
        duration: "5 days",
        price: CoursePrice { usd: 119, dzd: 18_000 },
        status: CourseStatus::ComingSoon,
        dates: "March 2025",
        features: &[
            "Deep Learning for Time Series",
            "LSTM & GRU Networks",
            "Advanced Forecasting Models",
            "Multivariate Time Series",
            "Real-time Processing",
            "Advanced Certificate",
        ],
        level: "Intermediate",
        projects: 5,
    },
    CourseDescriptor {
        key: CourseKey::Part3,
        title: "Applied Time Series",
        duration: "5 days",
        price: CoursePrice { usd: 139, dzd: 20_000 },
        status: CourseStatus::ComingSoon,
        dates: "May 2025",
        features: &[
            "End-to-End Projects",
            "Production Deployment",
            "API Development",
            "Dashboard Creation",
            "Performance Optimization",
            "Professional Certificate",
        ],
        level: "Advanced",
        projects: 8,
    },
];

#[must_use]
pub fn course(key: CourseKey) -> &'static CourseDescriptor {
    &CATALOG[key.number() - 1]
}

/// Looks a course up by its 1-based card number.
#[must_use]
pub fn course_by_number(number: usize) -> Option<&'static CourseDescriptor> {
    CourseKey::from_number(number).map(course)
}

pub const COMPARISON_HEADER: [&str; 4] = ["Feature", "Part 1", "Part 2", "Part 3"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub feature: &'static str,
    pub cells: [String; 3],
}

/// Side-by-side view of the three parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonTable {
    pub header: [&'static str; 4],
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// The table shown by the "Compare All Parts" action.
    #[must_use]
    pub fn standard() -> Self {
        let row = |feature: &'static str, cell: fn(&CourseDescriptor) -> String| ComparisonRow {
            feature,
            cells: CATALOG.each_ref().map(cell),
        };

        let rows = vec![
            row("Duration", |c| c.duration.to_owned()),
            row("Level", |c| c.level.to_owned()),
            row("Price (USD)", |c| format!("${}", group_thousands(u64::from(c.price.usd)))),
            row("Price (DZD)", |c| group_thousands(u64::from(c.price.dzd))),
            row("Certificate", |_| "✓".to_owned()),
            row("Live Sessions", |_| "✓".to_owned()),
            row("Projects", |c| c.projects.to_string()),
            row("Status", |c| c.status.label().to_owned()),
        ];

        Self { header: COMPARISON_HEADER, rows }
    }
}
