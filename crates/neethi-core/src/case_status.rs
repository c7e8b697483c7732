//! eCourts case-status payloads

use serde::{Deserialize, Serialize};

/// Minimum trimmed length of a CNR accepted for lookup
pub const MIN_CNR_LEN: usize = 16;

/// Maximum CNR length accepted by the input field
pub const MAX_CNR_LEN: usize = 20;

/// CNR that the backend serves from its demo fixture
pub const DEMO_CNR: &str = "DLCT010012345672024";

/// Public eCourts portal, linked when a case is not found
pub const ECOURTS_URL: &str = "https://services.ecourts.gov.in";

/// Source tag the backend uses for fixture data
pub const DEMO_SOURCE: &str = "demo";

/// A court case record as returned by `/case-status/{cnr}`
///
/// Every field is optional on the wire; absent values deserialize to empty
/// strings so renderers can show a placeholder instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    pub cnr: String,
    pub case_type: String,
    pub case_number: String,
    pub status: String,
    pub petitioner: String,
    pub respondent: String,
    pub court: String,
    pub judge: String,
    pub next_hearing: String,
    pub filing_date: String,
    pub case_stage: String,
    pub acts: Vec<String>,
}

impl CaseRecord {
    /// Label/value pairs in display order
    pub fn detail_rows(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("CNR Number", self.cnr.as_str()),
            ("Case Type", self.case_type.as_str()),
            ("Case Number", self.case_number.as_str()),
            ("Status", self.status.as_str()),
            ("Petitioner", self.petitioner.as_str()),
            ("Respondent", self.respondent.as_str()),
            ("Court", self.court.as_str()),
            ("Judge", self.judge.as_str()),
            ("Filing Date", self.filing_date.as_str()),
            ("Next Hearing", self.next_hearing.as_str()),
            ("Case Stage", self.case_stage.as_str()),
        ]
    }
}

/// Raw `/case-status/{cnr}` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaseStatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub data: Option<CaseRecord>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Classified case-status result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The backend found the case
    Found { record: CaseRecord, is_demo: bool },
    /// The backend answered but has no such case
    NotFound { message: String },
    /// The backend reported an error in the body
    Error { message: String },
}

impl CaseStatusResponse {
    /// Classify the response; an explicit `error` wins over everything else
    pub fn outcome(self) -> CaseOutcome {
        if let Some(message) = self.error {
            return CaseOutcome::Error { message };
        }
        match (self.success, self.data) {
            (true, Some(record)) => CaseOutcome::Found {
                record,
                is_demo: self.source.as_deref() == Some(DEMO_SOURCE),
            },
            _ => CaseOutcome::NotFound {
                message: self
                    .message
                    .unwrap_or_else(|| "Case not found.".to_string()),
            },
        }
    }
}

/// Whether `cnr` is long enough to be sent to the backend
pub fn is_valid_cnr(cnr: &str) -> bool {
    cnr.trim().chars().count() >= MIN_CNR_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_response_is_found_and_demo() {
        let json = r#"{
            "success": true,
            "source": "demo",
            "data": {
                "cnr": "DLCT010012345672024",
                "case_type": "Civil Suit",
                "case_number": "CS/123/2024",
                "status": "Pending",
                "petitioner": "Ram Kumar",
                "respondent": "State of Delhi",
                "court": "District Court, Tis Hazari, Delhi",
                "judge": "Hon'ble Sh. Justice A.K. Sharma",
                "next_hearing": "2024-02-20",
                "filing_date": "2024-01-15",
                "case_stage": "Arguments",
                "acts": ["Indian Contract Act, 1872"]
            }
        }"#;
        let response: CaseStatusResponse = serde_json::from_str(json).unwrap();
        match response.outcome() {
            CaseOutcome::Found { record, is_demo } => {
                assert!(is_demo);
                assert_eq!(record.case_number, "CS/123/2024");
                assert_eq!(record.acts.len(), 1);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_live_source_is_not_demo() {
        let response: CaseStatusResponse =
            serde_json::from_str(r#"{"success":true,"source":"ecourts","data":{"cnr":"X"}}"#)
                .unwrap();
        assert!(matches!(
            response.outcome(),
            CaseOutcome::Found { is_demo: false, .. }
        ));
    }

    #[test]
    fn test_not_found_carries_message() {
        let response: CaseStatusResponse =
            serde_json::from_str(r#"{"success":false,"message":"No case found for this CNR"}"#)
                .unwrap();
        assert_eq!(
            response.outcome(),
            CaseOutcome::NotFound {
                message: "No case found for this CNR".to_string()
            }
        );
    }

    #[test]
    fn test_error_field_wins() {
        let response: CaseStatusResponse =
            serde_json::from_str(r#"{"success":false,"error":"upstream down","message":"x"}"#)
                .unwrap();
        assert!(matches!(response.outcome(), CaseOutcome::Error { .. }));
    }

    #[test]
    fn test_success_without_data_is_not_found() {
        let response: CaseStatusResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(response.outcome(), CaseOutcome::NotFound { .. }));
    }

    #[test]
    fn test_cnr_length_boundary() {
        assert!(!is_valid_cnr("DLCT01001234567"));
        assert!(is_valid_cnr("DLCT010012345672"));
        assert!(!is_valid_cnr("   DLCT0100123    "));
        assert!(is_valid_cnr(DEMO_CNR));
    }
}
