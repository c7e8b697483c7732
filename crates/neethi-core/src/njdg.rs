//! National Judicial Data Grid statistics and their display derivation
//!
//! The backend returns raw case counts. Everything shown on screen is derived
//! here by pure functions so the same payload always renders the same text.

use serde::{Deserialize, Serialize};

/// Divisor for crore-denominated figures
pub const CRORE: u64 = 10_000_000;

/// Divisor for lakh-denominated figures
pub const LAKH: u64 = 100_000;

/// Divisor the compact summary panel uses for its "L" figures
pub const COMPACT_LAKH: u64 = 1_000_000;

/// Shown when the payload is demo data and carries no note of its own
pub const DEFAULT_DEMO_NOTE: &str =
    "This data is for demonstration. Visit njdg.ecourts.gov.in for live statistics.";

/// Placeholder for a figure the payload did not include
pub const MISSING: &str = "—";

/// Pending counts for one tier of courts
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtPendency {
    pub pending: Option<u64>,
    pub civil: Option<u64>,
    pub criminal: Option<u64>,
}

/// Daily filing and disposal figures
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisposalRate {
    pub daily_filing: Option<u64>,
    pub daily_disposal: Option<u64>,
    pub disposal_percentage: Option<f64>,
}

/// Pending cases grouped by age
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeWise {
    pub under_1_year: Option<u64>,
    #[serde(rename = "1_to_3_years")]
    pub one_to_three_years: Option<u64>,
    #[serde(rename = "3_to_5_years")]
    pub three_to_five_years: Option<u64>,
    #[serde(rename = "5_to_10_years")]
    pub five_to_ten_years: Option<u64>,
    pub above_10_years: Option<u64>,
}

impl AgeWise {
    /// Buckets in display order
    pub fn buckets(&self) -> [(&'static str, Option<u64>); 5] {
        [
            ("< 1 Year", self.under_1_year),
            ("1-3 Years", self.one_to_three_years),
            ("3-5 Years", self.three_to_five_years),
            ("5-10 Years", self.five_to_ten_years),
            ("> 10 Years", self.above_10_years),
        ]
    }
}

/// One entry of the top-states ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePendency {
    pub name: String,
    pub pending: u64,
}

/// Aggregate pendency statistics
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NjdgStats {
    pub total_pending_cases: Option<u64>,
    pub district_courts: CourtPendency,
    pub high_courts: CourtPendency,
    pub disposal_rate: DisposalRate,
    /// Expected sorted by `pending` descending; not re-sorted here
    pub top_states: Vec<StatePendency>,
    pub age_wise: AgeWise,
    pub last_updated: Option<String>,
}

/// `GET /njdg/stats` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NjdgResponse {
    #[serde(default)]
    pub data: Option<NjdgStats>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl NjdgResponse {
    pub fn is_demo(&self) -> bool {
        self.source.as_deref() == Some(crate::case_status::DEMO_SOURCE)
    }

    /// Notice to show under the dashboard, if any
    pub fn demo_notice(&self) -> Option<&str> {
        if self.is_demo() {
            Some(self.note.as_deref().unwrap_or(DEFAULT_DEMO_NOTE))
        } else {
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Number formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Divide `n` by `divisor` and render one decimal place, rounding half up
///
/// Integer arithmetic keeps the result exact for every count the backend
/// can send.
pub fn scaled_one_decimal(n: u64, divisor: u64) -> String {
    let divisor = divisor.max(1) as u128;
    let tenths = (n as u128 * 10 + divisor / 2) / divisor;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// `45234567` → `"4.5 Cr"`
pub fn format_crore(n: u64) -> String {
    format!("{} Cr", scaled_one_decimal(n, CRORE))
}

/// `4000000` → `"40.0 L"` (standard) or `"4.0 L"` (compact)
pub fn format_lakh(n: u64, scale: LakhScale) -> String {
    format!("{} L", scaled_one_decimal(n, scale.divisor()))
}

/// Group digits the Indian way: `1234567` → `"12,34,567"`
pub fn format_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

fn or_missing(value: Option<u64>, f: impl Fn(u64) -> String) -> String {
    value.map(f).unwrap_or_else(|| MISSING.to_string())
}

/// Which divisor the "L" figures use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LakhScale {
    /// Full dashboard: 1 L = 100,000
    #[default]
    Standard,
    /// Compact summary panel: figures divided by 1,000,000
    Compact,
}

impl LakhScale {
    pub fn divisor(&self) -> u64 {
        match self {
            LakhScale::Standard => LAKH,
            LakhScale::Compact => COMPACT_LAKH,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived display model
// ─────────────────────────────────────────────────────────────────────────────

/// One bar of the top-states chart
#[derive(Debug, Clone, PartialEq)]
pub struct StateBar {
    pub rank: usize,
    pub name: String,
    pub label: String,
    /// Fraction of the first entry's count; may exceed 1.0 if the payload
    /// is not sorted
    pub ratio: f64,
}

/// Civil/criminal split for one court tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtSplit {
    pub civil: String,
    pub criminal: String,
}

/// Every string the statistics dashboard shows
#[derive(Debug, Clone, PartialEq)]
pub struct NjdgDisplay {
    pub total_pending: String,
    pub district_pending: String,
    pub high_pending: String,
    pub disposal_percentage: String,
    pub daily_filing: String,
    pub daily_disposal: String,
    pub top_states: Vec<StateBar>,
    pub age_buckets: Vec<(&'static str, String)>,
    pub district_split: CourtSplit,
    pub high_split: CourtSplit,
    pub last_updated: Option<String>,
}

impl NjdgDisplay {
    pub fn derive(stats: &NjdgStats, scale: LakhScale) -> Self {
        let lakh = |n| format_lakh(n, scale);
        Self {
            total_pending: or_missing(stats.total_pending_cases, format_crore),
            district_pending: or_missing(stats.district_courts.pending, format_crore),
            high_pending: or_missing(stats.high_courts.pending, lakh),
            disposal_percentage: stats
                .disposal_rate
                .disposal_percentage
                .map(|p| format!("{}%", p))
                .unwrap_or_else(|| MISSING.to_string()),
            daily_filing: or_missing(stats.disposal_rate.daily_filing, format_indian),
            daily_disposal: or_missing(stats.disposal_rate.daily_disposal, format_indian),
            top_states: state_bars(&stats.top_states, scale),
            age_buckets: stats
                .age_wise
                .buckets()
                .into_iter()
                .map(|(label, v)| (label, or_missing(v, lakh)))
                .collect(),
            district_split: CourtSplit {
                civil: or_missing(stats.district_courts.civil, lakh),
                criminal: or_missing(stats.district_courts.criminal, lakh),
            },
            high_split: CourtSplit {
                civil: or_missing(stats.high_courts.civil, lakh),
                criminal: or_missing(stats.high_courts.criminal, lakh),
            },
            last_updated: stats.last_updated.clone(),
        }
    }
}

/// Bars relative to the first entry, which is assumed to be the largest
pub fn state_bars(states: &[StatePendency], scale: LakhScale) -> Vec<StateBar> {
    let head = states.first().map(|s| s.pending).unwrap_or(0);
    states
        .iter()
        .enumerate()
        .map(|(i, s)| StateBar {
            rank: i + 1,
            name: s.name.clone(),
            label: format!("{} cases", format_lakh(s.pending, scale)),
            ratio: if head == 0 {
                0.0
            } else {
                s.pending as f64 / head as f64
            },
        })
        .collect()
}

/// Headline figure for the home page, with a static fallback
pub fn headline_pending(stats: Option<&NjdgStats>) -> String {
    match stats.and_then(|s| s.total_pending_cases) {
        Some(n) => format_crore(n),
        None => "4.5 Cr+".to_string(),
    }
}
