//! Legal-aid eligibility form state

use neethi_core::eligibility::parse_income;
use neethi_core::{CaseType, EligibilityForm, EligibilityVerdict, IndianState};

use crate::fetch_state::{FeatureError, SlotResult};

pub const ELIGIBILITY_FAILED_MESSAGE: &str = "Failed to check eligibility. Please try again.";

/// Longest income the field accepts, in digits
const MAX_INCOME_DIGITS: usize = 12;

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EligibilityField {
    #[default]
    AnnualIncome,
    CaseType,
    State,
    IsWoman,
    IsScSt,
    IsSeniorCitizen,
    IsSpeciallyAbled,
    IsInCustody,
    Submit,
}

impl EligibilityField {
    pub const ALL: [EligibilityField; 9] = [
        EligibilityField::AnnualIncome,
        EligibilityField::CaseType,
        EligibilityField::State,
        EligibilityField::IsWoman,
        EligibilityField::IsScSt,
        EligibilityField::IsSeniorCitizen,
        EligibilityField::IsSpeciallyAbled,
        EligibilityField::IsInCustody,
        EligibilityField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EligibilityField::AnnualIncome => "Annual Income (₹)",
            EligibilityField::CaseType => "Case Type",
            EligibilityField::State => "State",
            EligibilityField::IsWoman => "Woman",
            EligibilityField::IsScSt => "SC/ST",
            EligibilityField::IsSeniorCitizen => "Senior Citizen",
            EligibilityField::IsSpeciallyAbled => "Specially Abled",
            EligibilityField::IsInCustody => "In Custody",
            EligibilityField::Submit => "Check Eligibility",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_flag(&self) -> bool {
        matches!(
            self,
            EligibilityField::IsWoman
                | EligibilityField::IsScSt
                | EligibilityField::IsSeniorCitizen
                | EligibilityField::IsSpeciallyAbled
                | EligibilityField::IsInCustody
        )
    }
}

/// Editable eligibility form plus the last verdict
#[derive(Debug, Clone, Default)]
pub struct EligibilityFormState {
    /// Raw income text; parsed only on submit
    pub income_input: String,
    pub case_type: CaseType,
    pub state: IndianState,
    pub is_woman: bool,
    pub is_sc_st: bool,
    pub is_senior_citizen: bool,
    pub is_specially_abled: bool,
    pub is_in_custody: bool,
    pub focus: EligibilityField,
    pub result: Option<SlotResult<EligibilityVerdict>>,
    pub loading: bool,
}

impl EligibilityFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit to the income field; anything else is ignored
    pub fn push_income_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.income_input.len() < MAX_INCOME_DIGITS {
            self.income_input.push(c);
        }
    }

    pub fn backspace_income(&mut self) {
        self.income_input.pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Cycle the focused enumeration forward
    pub fn cycle_forward(&mut self) {
        match self.focus {
            EligibilityField::CaseType => self.case_type = self.case_type.next(),
            EligibilityField::State => self.state = self.state.next(),
            _ => {}
        }
    }

    /// Cycle the focused enumeration backward
    pub fn cycle_backward(&mut self) {
        match self.focus {
            EligibilityField::CaseType => self.case_type = self.case_type.prev(),
            EligibilityField::State => self.state = self.state.prev(),
            _ => {}
        }
    }

    /// Flip the focused boolean
    pub fn toggle_focused(&mut self) {
        if let Some(flag) = self.flag_mut(self.focus) {
            *flag = !*flag;
        }
    }

    pub fn flag(&self, field: EligibilityField) -> Option<bool> {
        match field {
            EligibilityField::IsWoman => Some(self.is_woman),
            EligibilityField::IsScSt => Some(self.is_sc_st),
            EligibilityField::IsSeniorCitizen => Some(self.is_senior_citizen),
            EligibilityField::IsSpeciallyAbled => Some(self.is_specially_abled),
            EligibilityField::IsInCustody => Some(self.is_in_custody),
            _ => None,
        }
    }

    fn flag_mut(&mut self, field: EligibilityField) -> Option<&mut bool> {
        match field {
            EligibilityField::IsWoman => Some(&mut self.is_woman),
            EligibilityField::IsScSt => Some(&mut self.is_sc_st),
            EligibilityField::IsSeniorCitizen => Some(&mut self.is_senior_citizen),
            EligibilityField::IsSpeciallyAbled => Some(&mut self.is_specially_abled),
            EligibilityField::IsInCustody => Some(&mut self.is_in_custody),
            _ => None,
        }
    }

    /// Snapshot of the current field values; income falls back to 0
    pub fn snapshot(&self) -> EligibilityForm {
        EligibilityForm {
            annual_income: parse_income(&self.income_input),
            case_type: self.case_type,
            state: self.state,
            is_woman: self.is_woman,
            is_sc_st: self.is_sc_st,
            is_senior_citizen: self.is_senior_citizen,
            is_specially_abled: self.is_specially_abled,
            is_in_custody: self.is_in_custody,
        }
    }

    /// Overwrite every field from a form snapshot
    pub fn load_form(&mut self, form: &EligibilityForm) {
        self.income_input = form.annual_income.to_string();
        self.case_type = form.case_type;
        self.state = form.state;
        self.is_woman = form.is_woman;
        self.is_sc_st = form.is_sc_st;
        self.is_senior_citizen = form.is_senior_citizen;
        self.is_specially_abled = form.is_specially_abled;
        self.is_in_custody = form.is_in_custody;
    }

    /// Start a check; returns `None` while one is already in flight
    pub fn submit(&mut self) -> Option<EligibilityForm> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.snapshot())
    }

    pub fn complete<E>(&mut self, result: Result<EligibilityVerdict, E>) {
        self.result = Some(
            result.map_err(|_| FeatureError::Request(ELIGIBILITY_FAILED_MESSAGE.to_string())),
        );
        self.loading = false;
    }
}
