//! NALSA legal-aid eligibility payloads
//!
//! The eligibility decision itself belongs to the backend; this module only
//! models the form snapshot that is posted and the verdict that comes back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Case categories offered on the eligibility form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    #[default]
    Civil,
    Criminal,
    FamilyMatrimonial,
    Labour,
    Consumer,
    Property,
}

impl CaseType {
    pub const ALL: [CaseType; 6] = [
        CaseType::Civil,
        CaseType::Criminal,
        CaseType::FamilyMatrimonial,
        CaseType::Labour,
        CaseType::Consumer,
        CaseType::Property,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CaseType::Civil => "Civil",
            CaseType::Criminal => "Criminal",
            CaseType::FamilyMatrimonial => "Family/Matrimonial",
            CaseType::Labour => "Labour",
            CaseType::Consumer => "Consumer",
            CaseType::Property => "Property",
        }
    }

    /// Wire value, also accepted by [`CaseType::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::Civil => "civil",
            CaseType::Criminal => "criminal",
            CaseType::FamilyMatrimonial => "family_matrimonial",
            CaseType::Labour => "labour",
            CaseType::Consumer => "consumer",
            CaseType::Property => "property",
        }
    }

    /// Parse a wire value or label, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        let needle = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str() == needle || ct.label().to_lowercase() == needle)
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self, 1)
    }

    pub fn prev(&self) -> Self {
        cycle(&Self::ALL, *self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// States offered on the eligibility form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IndianState {
    #[default]
    Delhi,
    Maharashtra,
    #[serde(rename = "Uttar Pradesh")]
    UttarPradesh,
    Karnataka,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    #[serde(rename = "West Bengal")]
    WestBengal,
    Gujarat,
    Rajasthan,
}

impl IndianState {
    pub const ALL: [IndianState; 8] = [
        IndianState::Delhi,
        IndianState::Maharashtra,
        IndianState::UttarPradesh,
        IndianState::Karnataka,
        IndianState::TamilNadu,
        IndianState::WestBengal,
        IndianState::Gujarat,
        IndianState::Rajasthan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndianState::Delhi => "Delhi",
            IndianState::Maharashtra => "Maharashtra",
            IndianState::UttarPradesh => "Uttar Pradesh",
            IndianState::Karnataka => "Karnataka",
            IndianState::TamilNadu => "Tamil Nadu",
            IndianState::WestBengal => "West Bengal",
            IndianState::Gujarat => "Gujarat",
            IndianState::Rajasthan => "Rajasthan",
        }
    }

    /// Parse a state name; spaces, hyphens and underscores are interchangeable
    pub fn parse(value: &str) -> Option<Self> {
        let normalize = |s: &str| {
            s.trim()
                .to_lowercase()
                .replace(['_', '-'], " ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        };
        let needle = normalize(value);
        Self::ALL
            .into_iter()
            .find(|state| normalize(state.label()) == needle)
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, *self, 1)
    }

    pub fn prev(&self) -> Self {
        cycle(&Self::ALL, *self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for IndianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

/// Snapshot of the eligibility form, posted to `/legal-aid/check`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EligibilityForm {
    pub annual_income: u64,
    pub case_type: CaseType,
    pub state: IndianState,
    pub is_woman: bool,
    pub is_sc_st: bool,
    pub is_senior_citizen: bool,
    pub is_specially_abled: bool,
    pub is_in_custody: bool,
}

/// Coerce free-form income text to a non-negative integer
///
/// Mirrors integer-prefix parsing: leading whitespace is skipped, digits are
/// read up to the first non-digit, and anything unparsable (including an
/// empty field or a leading minus sign) becomes `0`.
pub fn parse_income(raw: &str) -> u64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Backend verdict for an eligibility check
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub next_steps: Option<Vec<String>>,
    #[serde(default)]
    pub reference: Option<String>,
}

impl EligibilityVerdict {
    pub fn headline(&self) -> &'static str {
        if self.eligible {
            "✅ You are Eligible for Free Legal Aid!"
        } else {
            "❌ Not Eligible for Free Legal Aid"
        }
    }
}
