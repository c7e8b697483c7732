//! Tele-Law lawyer directory payloads

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lawyer identifier
///
/// The directory service has used both string ids (`"LAW001"`) and numeric
/// ids; either is accepted and echoed verbatim into the connect path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LawyerId {
    Number(u64),
    Text(String),
}

impl fmt::Display for LawyerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LawyerId::Number(n) => write!(f, "{}", n),
            LawyerId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for LawyerId {
    fn from(value: u64) -> Self {
        LawyerId::Number(value)
    }
}

impl From<&str> for LawyerId {
    fn from(value: &str) -> Self {
        match value.parse::<u64>() {
            Ok(n) => LawyerId::Number(n),
            Err(_) => LawyerId::Text(value.to_string()),
        }
    }
}

/// A panel lawyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: LawyerId,
    pub name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub next_available: Option<String>,
    #[serde(default)]
    pub profile_image: String,
}

impl Lawyer {
    /// Badge text shown next to the lawyer
    pub fn availability_label(&self) -> String {
        if self.available {
            "● Available".to_string()
        } else {
            format!(
                "Next: {}",
                self.next_available.as_deref().unwrap_or("—")
            )
        }
    }

    /// Label of the connect action
    pub fn action_label(&self) -> &'static str {
        if self.available {
            "Connect Now"
        } else {
            "Join Queue"
        }
    }
}

/// `GET /tele-law/lawyers` response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LawyerListing {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub available_now: u32,
    #[serde(default)]
    pub lawyers: Vec<Lawyer>,
}

impl LawyerListing {
    pub fn summary(&self) -> String {
        format!(
            "{} of {} lawyers available now",
            self.available_now, self.total
        )
    }
}

/// `POST /tele-law/connect/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectReply {
    pub message: String,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub queue_position: Option<u32>,
    #[serde(default)]
    pub estimated_wait: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_with_string_ids() {
        let json = r#"{
            "total": 2,
            "available_now": 1,
            "lawyers": [
                {"id": "LAW001", "name": "Adv. Priya Sharma", "specialization": "Family Law",
                 "languages": ["Hindi", "English"], "experience_years": 12, "rating": 4.8,
                 "available": true, "next_available": null, "profile_image": "👩‍⚖️"},
                {"id": "LAW003", "name": "Adv. Sunita Devi", "specialization": "Property & Land Disputes",
                 "languages": ["Hindi", "Bhojpuri"], "experience_years": 8, "rating": 4.6,
                 "available": false, "next_available": "2:30 PM", "profile_image": "👩‍⚖️"}
            ]
        }"#;
        let listing: LawyerListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.lawyers.len(), 2);
        assert_eq!(listing.lawyers[0].id, LawyerId::Text("LAW001".into()));
        assert_eq!(listing.summary(), "1 of 2 lawyers available now");
        assert_eq!(listing.lawyers[0].availability_label(), "● Available");
        assert_eq!(listing.lawyers[1].availability_label(), "Next: 2:30 PM");
        assert_eq!(listing.lawyers[1].action_label(), "Join Queue");
    }

    #[test]
    fn test_numeric_id_displays_verbatim() {
        let lawyer: Lawyer = serde_json::from_str(r#"{"id": 7, "name": "Adv. X"}"#).unwrap();
        assert_eq!(lawyer.id, LawyerId::Number(7));
        assert_eq!(lawyer.id.to_string(), "7");
    }

    #[test]
    fn test_lawyer_id_from_str() {
        assert_eq!(LawyerId::from("7"), LawyerId::Number(7));
        assert_eq!(LawyerId::from("LAW002"), LawyerId::Text("LAW002".into()));
    }

    #[test]
    fn test_connect_reply_minimal() {
        let reply: ConnectReply =
            serde_json::from_str(r#"{"message":"Connecting you with Adv. Rajesh Kumar..."}"#)
                .unwrap();
        assert_eq!(reply.message, "Connecting you with Adv. Rajesh Kumar...");
        assert!(reply.queue_position.is_none());
    }
}
